//! JavaScript error kinds and engine-level abrupt completions.
//!
//! [`ErrorKind`] names the native error constructors. [`JsError`] is what
//! engine operations return when they complete abruptly: either a native
//! error raised by the engine itself, or an arbitrary value thrown by
//! script.

use std::fmt;

use thiserror::Error;

use crate::Value;

/// The kind of JavaScript error.
///
/// These correspond to JavaScript's built-in error constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Generic Error
    Error,
    /// Error in eval() function (legacy)
    EvalError,
    /// Value out of allowed range
    RangeError,
    /// Reference to an undefined variable
    ReferenceError,
    /// Syntax error in JavaScript code
    SyntaxError,
    /// Type error (e.g., calling a non-function)
    TypeError,
    /// Error in URI handling functions
    URIError,
}

impl ErrorKind {
    /// Every error kind, `Error` first.
    pub const ALL: [ErrorKind; 7] = [
        ErrorKind::Error,
        ErrorKind::EvalError,
        ErrorKind::RangeError,
        ErrorKind::ReferenceError,
        ErrorKind::SyntaxError,
        ErrorKind::TypeError,
        ErrorKind::URIError,
    ];

    /// Get the error name as a string
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Error => "Error",
            ErrorKind::EvalError => "EvalError",
            ErrorKind::RangeError => "RangeError",
            ErrorKind::ReferenceError => "ReferenceError",
            ErrorKind::SyntaxError => "SyntaxError",
            ErrorKind::TypeError => "TypeError",
            ErrorKind::URIError => "URIError",
        }
    }

    /// Returns true for the native error kinds, i.e. everything but `Error`.
    pub fn is_native(&self) -> bool {
        !matches!(self, ErrorKind::Error)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An abrupt completion.
///
/// # Examples
///
/// ```
/// use core_types::{ErrorKind, JsError, Value};
///
/// let error = JsError::type_error("undefined is not a function");
/// assert_eq!(error.kind(), Some(ErrorKind::TypeError));
/// assert_eq!(error.to_string(), "TypeError: undefined is not a function");
///
/// let thrown = JsError::thrown(Value::string("oops"));
/// assert_eq!(thrown.kind(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum JsError {
    /// An error raised by the engine itself
    #[error("{kind}: {message}")]
    Native {
        /// The type of error
        kind: ErrorKind,
        /// Human-readable error message
        message: String,
    },
    /// A value thrown by script
    #[error("Uncaught {0}")]
    Thrown(Value),
}

impl JsError {
    /// Create a native error of the given kind
    pub fn native(kind: ErrorKind, message: impl Into<String>) -> Self {
        JsError::Native {
            kind,
            message: message.into(),
        }
    }

    /// Create a TypeError
    pub fn type_error(message: impl Into<String>) -> Self {
        JsError::native(ErrorKind::TypeError, message)
    }

    /// Create a RangeError
    pub fn range_error(message: impl Into<String>) -> Self {
        JsError::native(ErrorKind::RangeError, message)
    }

    /// Wrap a value thrown by script
    pub fn thrown(value: Value) -> Self {
        JsError::Thrown(value)
    }

    /// The native kind, or `None` for script-thrown values
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            JsError::Native { kind, .. } => Some(*kind),
            JsError::Thrown(_) => None,
        }
    }
}
