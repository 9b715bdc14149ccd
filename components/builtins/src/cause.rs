//! `InstallErrorCause(O, options)`.

use log::trace;

use core_types::{JsError, JsObject, PropertyDescriptor, Value};

/// Copy `options.cause` onto `target` as a hidden own property.
///
/// Only an object `options` with an own `cause` has any effect; every
/// other shape is a silent no-op.
pub fn install_error_cause(target: &JsObject, options: &Value) -> Result<(), JsError> {
    let Some(cause) = options.as_object().and_then(|o| o.get_own_property("cause")) else {
        return Ok(());
    };

    trace!("installing cause {:?}", cause.value);
    target.define_property_or_throw("cause", PropertyDescriptor::non_enumerable(cause.value))
}
