//! Error.prototype and the native error prototypes.

use core_types::{ErrorKind, JsError, JsObject, PropertyDescriptor, Value};

use crate::host::StringCoercion;

/// Error.prototype methods
pub struct ErrorPrototype;

impl ErrorPrototype {
    /// Build the prototype object for `kind`.
    ///
    /// Installs `constructor`, `name` and an empty `message`, all writable,
    /// non-enumerable and configurable. `parent` is `Object.prototype` for
    /// `Error` and `Error.prototype` for the native kinds.
    pub fn create(kind: ErrorKind, constructor: &JsObject, parent: &JsObject) -> Result<JsObject, JsError> {
        let prototype = JsObject::ordinary(Some(parent.clone()));
        prototype.define_property_or_throw(
            "constructor",
            PropertyDescriptor::non_enumerable(Value::Object(constructor.clone())),
        )?;
        prototype.define_property_or_throw("name", PropertyDescriptor::non_enumerable(Value::string(kind.name())))?;
        prototype.define_property_or_throw("message", PropertyDescriptor::non_enumerable(Value::string("")))?;
        Ok(prototype)
    }

    /// Error.prototype.toString()
    ///
    /// `name` defaults to `"Error"` and `message` to `""`; either part is
    /// dropped when empty.
    pub fn to_string<C>(coercion: &mut C, this: &Value) -> Result<Value, JsError>
    where
        C: StringCoercion + ?Sized,
    {
        let Value::Object(object) = this else {
            return Err(JsError::type_error(
                "Error.prototype.toString called on non-object",
            ));
        };

        let name = match object.get("name") {
            Value::Undefined => "Error".to_string(),
            other => coercion.to_string_coercion(&other)?,
        };
        let message = match object.get("message") {
            Value::Undefined => String::new(),
            other => coercion.to_string_coercion(&other)?,
        };

        let rendered = if name.is_empty() {
            message
        } else if message.is_empty() {
            name
        } else {
            format!("{}: {}", name, message)
        };
        Ok(Value::String(rendered))
    }
}
