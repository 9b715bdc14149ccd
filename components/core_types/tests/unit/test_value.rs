//! Unit tests for Value enum

use core_types::{JsObject, JsSymbol, ObjectKind, Value};
use num_bigint::BigInt;

#[cfg(test)]
mod to_js_string_tests {
    use super::*;

    #[test]
    fn test_primitives() {
        assert_eq!(Value::Undefined.to_js_string().unwrap(), "undefined");
        assert_eq!(Value::Null.to_js_string().unwrap(), "null");
        assert_eq!(Value::Boolean(false).to_js_string().unwrap(), "false");
        assert_eq!(Value::Smi(-100).to_js_string().unwrap(), "-100");
        assert_eq!(Value::string("hi").to_js_string().unwrap(), "hi");
    }

    #[test]
    fn test_doubles() {
        assert_eq!(Value::Double(3.25).to_js_string().unwrap(), "3.25");
        assert_eq!(Value::Double(2.0).to_js_string().unwrap(), "2");
        assert_eq!(Value::Double(f64::NAN).to_js_string().unwrap(), "NaN");
        assert_eq!(Value::Double(f64::INFINITY).to_js_string().unwrap(), "Infinity");
        assert_eq!(
            Value::Double(f64::NEG_INFINITY).to_js_string().unwrap(),
            "-Infinity"
        );
    }

    #[test]
    fn test_bigint() {
        let n = Value::BigInt(BigInt::from(-5));
        assert_eq!(n.to_js_string().unwrap(), "-5");
    }

    #[test]
    fn test_symbol_fails() {
        let err = Value::Symbol(JsSymbol::new(Some("s"))).to_js_string().unwrap_err();
        assert_eq!(err.kind(), Some(core_types::ErrorKind::TypeError));
    }

    #[test]
    fn test_object() {
        let obj = Value::Object(JsObject::ordinary(None));
        assert_eq!(obj.to_js_string().unwrap(), "[object Object]");
    }
}

#[cfg(test)]
mod type_of_tests {
    use super::*;

    #[test]
    fn test_type_of_all_variants() {
        assert_eq!(Value::Undefined.type_of(), "undefined");
        assert_eq!(Value::Null.type_of(), "object");
        assert_eq!(Value::Boolean(true).type_of(), "boolean");
        assert_eq!(Value::Smi(1).type_of(), "number");
        assert_eq!(Value::Double(1.5).type_of(), "number");
        assert_eq!(Value::string("").type_of(), "string");
        assert_eq!(Value::Symbol(JsSymbol::new(None)).type_of(), "symbol");
        assert_eq!(Value::BigInt(BigInt::from(1)).type_of(), "bigint");
        assert_eq!(Value::Object(JsObject::ordinary(None)).type_of(), "object");
        assert_eq!(
            Value::Object(JsObject::new(ObjectKind::Function, None)).type_of(),
            "function"
        );
    }
}

#[cfg(test)]
mod equality_tests {
    use super::*;

    #[test]
    fn test_objects_compare_by_identity() {
        let a = JsObject::ordinary(None);
        let b = JsObject::ordinary(None);
        assert_eq!(Value::Object(a.clone()), Value::Object(a.clone()));
        assert_ne!(Value::Object(a), Value::Object(b));
    }

    #[test]
    fn test_smi_and_double_compare_numerically() {
        assert_eq!(Value::Smi(2), Value::Double(2.0));
        assert_ne!(Value::Smi(2), Value::string("2"));
    }

    #[test]
    fn test_from_object() {
        let obj = JsObject::ordinary(None);
        let value: Value = obj.clone().into();
        assert!(value.as_object().unwrap().ptr_eq(&obj));
    }
}
