//! JavaScript value representation.
//!
//! This module provides the core `Value` enum that represents all possible
//! JavaScript values. Primitives are stored inline; objects are shared
//! handles into the object model.

use num_bigint::BigInt;
use num_traits::Zero;
use std::fmt;
use std::rc::Rc;

use crate::{JsError, JsObject, ObjectKind};

/// A JavaScript symbol.
///
/// Symbols compare by identity: two symbols with the same description are
/// still different values.
#[derive(Clone)]
pub struct JsSymbol(Rc<Option<String>>);

impl JsSymbol {
    /// Create a new unique symbol
    pub fn new(description: Option<&str>) -> Self {
        JsSymbol(Rc::new(description.map(str::to_string)))
    }

    /// The symbol's description, if any
    pub fn description(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl PartialEq for JsSymbol {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for JsSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}

/// Represents any JavaScript value.
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// let undefined = Value::Undefined;
/// let number = Value::Smi(42);
/// let float = Value::Double(3.14);
///
/// assert!(!undefined.is_truthy());
/// assert!(number.is_truthy());
/// assert_eq!(float.type_of(), "number");
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// JavaScript undefined value
    Undefined,
    /// JavaScript null value
    Null,
    /// JavaScript boolean (true or false)
    Boolean(bool),
    /// Small integer
    Smi(i32),
    /// IEEE 754 double-precision floating point
    Double(f64),
    /// JavaScript string value
    String(std::string::String),
    /// JavaScript symbol
    Symbol(JsSymbol),
    /// JavaScript BigInt (arbitrary precision integer)
    BigInt(BigInt),
    /// Object reference
    Object(JsObject),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Smi(a), Value::Smi(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a == b,
            (Value::Smi(a), Value::Double(b)) | (Value::Double(b), Value::Smi(a)) => {
                f64::from(*a) == *b
            }
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<JsObject> for Value {
    fn from(object: JsObject) -> Self {
        Value::Object(object)
    }
}

impl Value {
    /// Create string value
    pub fn string(s: impl Into<std::string::String>) -> Self {
        Value::String(s.into())
    }

    /// Create number value, using the small-integer form when exact
    pub fn number(n: f64) -> Self {
        if n.fract() == 0.0 && n >= f64::from(i32::MIN) && n <= f64::from(i32::MAX) && !is_negative_zero(n)
        {
            Value::Smi(n as i32)
        } else {
            Value::Double(n)
        }
    }

    /// Check if value is undefined
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Check if value is an object
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Borrow the object handle, if this is an object
    pub fn as_object(&self) -> Option<&JsObject> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Borrow the string contents, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// ECMAScript `SameValue`: like `==` on this type, except `NaN` equals
    /// itself and `+0` differs from `-0`.
    pub fn same_value(&self, other: &Value) -> bool {
        match (self.as_f64(), other.as_f64()) {
            (Some(a), Some(b)) => {
                (a.is_nan() && b.is_nan())
                    || (a == b && is_negative_zero(a) == is_negative_zero(b))
            }
            _ => self == other,
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Smi(n) => Some(f64::from(*n)),
            Value::Double(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns whether this value is truthy in JavaScript semantics.
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert!(!Value::Undefined.is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// assert!(!Value::Boolean(false).is_truthy());
    /// assert!(!Value::Smi(0).is_truthy());
    /// assert!(!Value::Double(f64::NAN).is_truthy());
    ///
    /// assert!(Value::Boolean(true).is_truthy());
    /// assert!(Value::Smi(42).is_truthy());
    /// ```
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined => false,
            Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Smi(n) => *n != 0,
            Value::Double(n) => !n.is_nan() && *n != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::Symbol(_) => true,
            Value::BigInt(n) => !n.is_zero(), // 0n is falsy
            Value::Object(_) => true,
        }
    }

    /// Returns the JavaScript typeof result for this value.
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert_eq!(Value::Undefined.type_of(), "undefined");
    /// assert_eq!(Value::Null.type_of(), "object");
    /// assert_eq!(Value::Boolean(true).type_of(), "boolean");
    /// assert_eq!(Value::Smi(42).type_of(), "number");
    /// ```
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object", // JavaScript quirk
            Value::Boolean(_) => "boolean",
            Value::Smi(_) | Value::Double(_) => "number",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::BigInt(_) => "bigint",
            Value::Object(o) if o.kind() == ObjectKind::Function => "function",
            Value::Object(_) => "object",
        }
    }

    /// ECMAScript `ToString` for values that need no script execution.
    ///
    /// Symbols cannot be converted implicitly and produce a `TypeError`.
    /// Objects render as `"[object Object]"`; invoking user-defined
    /// `toString`/`valueOf` is up to the caller's coercion strategy.
    ///
    /// ```
    /// use core_types::{JsSymbol, Value};
    ///
    /// assert_eq!(Value::Double(1.5).to_js_string().unwrap(), "1.5");
    /// assert!(Value::Symbol(JsSymbol::new(None)).to_js_string().is_err());
    /// ```
    pub fn to_js_string(&self) -> Result<std::string::String, JsError> {
        match self {
            Value::Symbol(_) => Err(JsError::type_error(
                "Cannot convert a Symbol value to a string",
            )),
            Value::BigInt(n) => Ok(n.to_string()),
            other => Ok(other.to_string()),
        }
    }
}

fn is_negative_zero(n: f64) -> bool {
    n == 0.0 && n.is_sign_negative()
}

/// ECMAScript `Number::toString(10)`.
///
/// `ryu` supplies the shortest digits that round-trip; the layout follows
/// the `k`/`n` rules: plain integers up to 21 digits, plain decimals down
/// to `1e-6`, exponent form (`1e+21`, `1.5e-7`) outside that range.
fn format_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        return write!(f, "NaN");
    }
    if n == 0.0 {
        // -0 stringifies as "0"
        return write!(f, "0");
    }
    if n < 0.0 {
        write!(f, "-")?;
    }
    if n.is_infinite() {
        return write!(f, "Infinity");
    }

    let (digits, point) = shortest_digits(n.abs());
    let k = digits.len() as i32;

    if k <= point && point <= 21 {
        write!(f, "{}{}", digits, "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        write!(f, "{}.{}", int, frac)
    } else if -6 < point && point <= 0 {
        write!(f, "0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let exponent = point - 1;
        let sign = if exponent < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            write!(f, "{}e{}{}", first, sign, exponent.abs())
        } else {
            write!(f, "{}.{}e{}{}", first, rest, sign, exponent.abs())
        }
    }
}

/// Decompose a finite positive `n` into significant digits `s` (no leading
/// or trailing zeros) and the decimal point position `p`, so that
/// the value is `0.s * 10^p`.
fn shortest_digits(n: f64) -> (String, i32) {
    let mut buffer = ryu::Buffer::new();
    let text = buffer.format_finite(n);

    let (mantissa, exponent) = match text.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (text, 0),
    };
    let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let mut point = int.len() as i32 + exponent;
    let all: String = int.chars().chain(frac.chars()).collect();
    let trimmed = all.trim_start_matches('0');
    point -= (all.len() - trimmed.len()) as i32;
    (trimmed.trim_end_matches('0').to_string(), point)
}

/// JavaScript string conversion for display purposes.
///
/// Symbols render as `Symbol(description)` and BigInts with the `n`
/// suffix, matching how consoles show them.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", if *b { "true" } else { "false" }),
            Value::Smi(n) => write!(f, "{}", n),
            Value::Double(n) => format_number(f, *n),
            Value::String(s) => write!(f, "{}", s),
            Value::Symbol(s) => write!(f, "Symbol({})", s.description().unwrap_or("")),
            Value::BigInt(n) => write!(f, "{}n", n),
            Value::Object(o) if o.kind() == ObjectKind::Function => {
                write!(f, "function () {{ [native code] }}")
            }
            Value::Object(_) => write!(f, "[object Object]"),
        }
    }
}
