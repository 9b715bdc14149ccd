//! Collaborator interfaces consumed by the built-ins.
//!
//! Built-ins never reach into interpreter internals. Everything they need
//! from the running engine comes through these narrow traits, which the
//! interpreter (or the reference [`Agent`](crate::Agent)) implements.

use core_types::{CallFrame, JsError, SourceLocation, Value};

use crate::realm::Intrinsics;

/// Read-only view of the live call stack.
pub trait CallStackView {
    /// The innermost active frame, if any
    fn peek_top(&self) -> Option<&CallFrame>;

    /// Render a trace of the active frames, innermost first, omitting the
    /// `skip` innermost frames. `location` is where execution currently is.
    fn render_trace(&self, location: &SourceLocation, skip: usize) -> String;
}

/// Tracks the most recently executed syntax element.
pub trait SourceTracker {
    /// `None` until any code has executed in this evaluation context
    fn last_executed_location(&self) -> Option<SourceLocation>;
}

/// ECMAScript `ToString`, including any user-defined conversion.
pub trait StringCoercion {
    /// Convert `value` to a string. May run script and may fail.
    fn to_string_coercion(&mut self, value: &Value) -> Result<String, JsError>;
}

/// Access to the current realm's intrinsic objects.
pub trait RealmView {
    /// The intrinsics of the current realm
    fn intrinsics(&self) -> &Intrinsics;
}

/// Everything a built-in may ask of the running engine.
pub trait Host: CallStackView + SourceTracker + StringCoercion + RealmView {}

impl<T> Host for T where T: CallStackView + SourceTracker + StringCoercion + RealmView {}
