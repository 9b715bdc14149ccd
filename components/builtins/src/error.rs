//! JavaScript Error constructors.
//!
//! One [`ErrorConstructor`] exists per error kind and realm. All kinds
//! share the same construction algorithm:
//!
//! 1. resolve the prototype from `new_target` and allocate the instance
//! 2. define `message` when the first argument is not `undefined`
//! 3. define `stack` from the live call stack
//! 4. define `cause` when the options argument carries one
//!
//! The first failure aborts construction; a half-built instance is never
//! returned.

use std::fmt;

use log::trace;
use thiserror::Error;

use core_types::{ErrorKind, JsError, JsObject, PropertyDescriptor, Value};

use crate::cause::install_error_cause;
use crate::error_prototype::ErrorPrototype;
use crate::function::{Callable, Constructor};
use crate::host::Host;
use crate::prototype::{ordinary_create_from_constructor, Allocator, PrototypeResolver};
use crate::stack_trace::capture_stack;

/// Why constructing an error instance failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstructError {
    /// Converting the message argument to a string failed; the conversion's
    /// own error is carried unmodified
    #[error(transparent)]
    Coercion(JsError),
    /// The instance refused one of its own properties
    #[error("cannot define `{key}` on error instance: {source}")]
    PropertyRejected {
        /// The property being defined
        key: &'static str,
        /// The property system's error
        source: JsError,
    },
}

/// Result type for error construction
pub type ConstructResult<T> = Result<T, ConstructError>;

impl From<ConstructError> for JsError {
    fn from(err: ConstructError) -> Self {
        match err {
            ConstructError::Coercion(e) => e,
            ConstructError::PropertyRejected { source, .. } => source,
        }
    }
}

fn define(target: &JsObject, key: &'static str, desc: PropertyDescriptor) -> ConstructResult<()> {
    target
        .define_property_or_throw(key, desc)
        .map_err(|source| ConstructError::PropertyRejected { key, source })
}

/// The `Error` constructor, or one of the native error constructors.
///
/// Immutable after realm initialisation; construction only ever touches
/// the freshly allocated instance, so nested construction from inside a
/// message conversion is safe.
pub struct ErrorConstructor {
    kind: ErrorKind,
    function_object: JsObject,
    prototype_object: JsObject,
    default_prototype: PrototypeResolver,
    allocate: Allocator,
}

impl ErrorConstructor {
    /// Value of the constructor's `length` property
    pub const LENGTH: i32 = 1;

    /// Create the constructor and its prototype object.
    ///
    /// `function_prototype` becomes the constructor's `[[Prototype]]`,
    /// `object_prototype` the prototype object's.
    pub fn new(
        kind: ErrorKind,
        function_prototype: &JsObject,
        object_prototype: &JsObject,
        default_prototype: PrototypeResolver,
    ) -> Result<Self, JsError> {
        let function_object = JsObject::function(Some(function_prototype.clone()));
        let prototype_object = ErrorPrototype::create(kind, &function_object, object_prototype)?;

        function_object.define_property_or_throw(
            "length",
            PropertyDescriptor::configurable_only(Value::Smi(Self::LENGTH)),
        )?;
        function_object.define_property_or_throw(
            "name",
            PropertyDescriptor::configurable_only(Value::string(kind.name())),
        )?;
        function_object.define_property_or_throw(
            "prototype",
            PropertyDescriptor::frozen(Value::Object(prototype_object.clone())),
        )?;

        Ok(ErrorConstructor {
            kind,
            function_object,
            prototype_object,
            default_prototype,
            allocate: JsObject::error_instance,
        })
    }

    /// Replace the allocation stage, for embedders that hand out their own
    /// instance objects
    pub fn with_allocator(mut self, allocate: Allocator) -> Self {
        self.allocate = allocate;
        self
    }

    /// The error kind this constructor builds
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The constructor as a JavaScript function object; this is its
    /// identity on the call stack
    pub fn function_object(&self) -> &JsObject {
        &self.function_object
    }

    /// The constructor's `prototype` object
    pub fn prototype_object(&self) -> &JsObject {
        &self.prototype_object
    }

    /// `Error(...)` without `new`. The receiver is ignored.
    pub fn call_as_function(&self, host: &mut dyn Host, _this: &Value, args: &[Value]) -> ConstructResult<JsObject> {
        self.construct(host, args)
    }

    /// `new Error(...)` with the constructor itself as `new_target`
    pub fn construct(&self, host: &mut dyn Host, args: &[Value]) -> ConstructResult<JsObject> {
        let new_target = Value::Object(self.function_object.clone());
        self.construct_with_new_target(host, args, &new_target)
    }

    /// `new Error(...)` on behalf of `new_target`, e.g. a subclass
    pub fn construct_with_new_target(
        &self,
        host: &mut dyn Host,
        args: &[Value],
        new_target: &Value,
    ) -> ConstructResult<JsObject> {
        trace!("{} constructor invoked with {} argument(s)", self.kind, args.len());

        let o = ordinary_create_from_constructor(
            new_target,
            host.intrinsics(),
            &self.default_prototype,
            self.allocate,
        );

        let message = args.first().unwrap_or(&Value::Undefined);
        if !message.is_undefined() {
            let msg = host
                .to_string_coercion(message)
                .map_err(ConstructError::Coercion)?;
            define(&o, "message", PropertyDescriptor::new(Value::String(msg), true, false, true))?;
        }

        let stack = capture_stack(&*host, &self.function_object);
        define(&o, "stack", PropertyDescriptor::new(stack, true, false, true))?;

        let options = args.get(1).unwrap_or(&Value::Undefined);
        install_error_cause(&o, options).map_err(|source| ConstructError::PropertyRejected {
            key: "cause",
            source,
        })?;

        Ok(o)
    }
}

impl Callable for ErrorConstructor {
    fn call(&self, host: &mut dyn Host, this: &Value, args: &[Value]) -> Result<Value, JsError> {
        Ok(Value::Object(self.call_as_function(host, this, args)?))
    }
}

impl Constructor for ErrorConstructor {
    fn construct_value(&self, host: &mut dyn Host, args: &[Value], new_target: &Value) -> Result<Value, JsError> {
        Ok(Value::Object(self.construct_with_new_target(host, args, new_target)?))
    }
}

impl fmt::Debug for ErrorConstructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorConstructor")
            .field("kind", &self.kind)
            .field("function_object", &self.function_object)
            .field("prototype_object", &self.prototype_object)
            .finish_non_exhaustive()
    }
}
