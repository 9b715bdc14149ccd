//! `stack` capture for error instances.

use log::debug;

use core_types::{JsObject, Value};

use crate::host::{CallStackView, SourceTracker};

/// How many innermost frames to leave out of the trace for an error built
/// by `constructor`.
///
/// When the constructor itself is the innermost frame (script wrote
/// `new Error(...)` or `Error(...)`), that frame is skipped so the trace
/// starts at the throw site. Otherwise nothing is skipped.
pub fn skip_count<H>(host: &H, constructor: &JsObject) -> usize
where
    H: CallStackView + ?Sized,
{
    match host.peek_top() {
        Some(frame) if frame.is_function(constructor) => 1,
        _ => 0,
    }
}

/// Build the value of `stack`: `undefined` before any code has run,
/// otherwise the rendered trace.
pub fn capture_stack<H>(host: &H, constructor: &JsObject) -> Value
where
    H: CallStackView + SourceTracker + ?Sized,
{
    let Some(location) = host.last_executed_location() else {
        debug!("no executed code yet, stack is undefined");
        return Value::Undefined;
    };

    let skip = skip_count(host, constructor);
    debug!("rendering stack from {} skipping {} frame(s)", location, skip);
    Value::String(host.render_trace(&location, skip))
}
