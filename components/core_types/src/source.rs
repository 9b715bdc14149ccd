//! Source location and call frame types for JavaScript error tracking.
//!
//! This module provides types for tracking source locations and call stacks
//! in JavaScript execution.

use std::fmt;

use crate::JsObject;

/// A position in a script.
///
/// Used for error reporting and debugging to indicate where an issue occurred.
///
/// # Examples
///
/// ```
/// use core_types::SourceLocation;
///
/// let loc = SourceLocation::new(Some("main.js"), 10, 5);
/// assert_eq!(loc.to_string(), "main.js:10:5");
///
/// let anonymous = SourceLocation::new(None, 1, 1);
/// assert_eq!(anonymous.to_string(), "<anonymous>:1:1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// URL or file path of the source, or None if not available
    pub source: Option<String>,
    /// Line number (1-indexed)
    pub line: u32,
    /// Column number (1-indexed)
    pub column: u32,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(source: Option<&str>, line: u32, column: u32) -> Self {
        SourceLocation {
            source: source.map(str::to_string),
            line,
            column,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.source.as_deref().unwrap_or("<anonymous>"),
            self.line,
            self.column
        )
    }
}

/// One active invocation on the call stack.
///
/// `call_site` is where the caller was executing when it entered this frame.
///
/// # Examples
///
/// ```
/// use core_types::{CallFrame, JsObject, SourceLocation};
///
/// let callee = JsObject::function(None);
/// let frame = CallFrame::new(Some(callee.clone()), "myFunction", SourceLocation::new(None, 25, 10));
///
/// assert!(frame.is_function(&callee));
/// assert_eq!(frame.function_name, "myFunction");
/// ```
#[derive(Debug, Clone)]
pub struct CallFrame {
    /// The function being executed, if it has an object identity
    pub function: Option<JsObject>,
    /// Name used when rendering the frame
    pub function_name: String,
    /// Location in the caller from which this frame was entered
    pub call_site: SourceLocation,
}

impl CallFrame {
    /// Create a new call frame
    pub fn new(function: Option<JsObject>, function_name: impl Into<String>, call_site: SourceLocation) -> Self {
        CallFrame {
            function,
            function_name: function_name.into(),
            call_site,
        }
    }

    /// Whether this frame is executing exactly `function`
    pub fn is_function(&self, function: &JsObject) -> bool {
        self.function.as_ref().is_some_and(|f| f.ptr_eq(function))
    }
}
