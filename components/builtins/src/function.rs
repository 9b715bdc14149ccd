//! Dispatch seams for native functions.
//!
//! An interpreter holding a native function calls through these traits;
//! results are plain engine completions so they can be rethrown as-is.

use core_types::{JsError, Value};

use crate::host::Host;

/// A native function's `[[Call]]`.
pub trait Callable {
    /// Invoke with an explicit `this`
    fn call(&self, host: &mut dyn Host, this: &Value, args: &[Value]) -> Result<Value, JsError>;
}

/// A native function's `[[Construct]]`.
pub trait Constructor: Callable {
    /// Invoke as `new`, resolving the instance prototype from `new_target`
    fn construct_value(&self, host: &mut dyn Host, args: &[Value], new_target: &Value) -> Result<Value, JsError>;
}
