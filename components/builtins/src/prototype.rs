//! Prototype resolution for built-in constructors.
//!
//! Construction is a two-stage factory: resolve the prototype from
//! `new_target` (falling back to a realm default), then allocate against
//! it.

use std::rc::Rc;

use core_types::{JsObject, Value};

use crate::realm::Intrinsics;

/// Picks the fallback prototype for a constructor out of the realm's
/// intrinsics.
pub type PrototypeResolver = Rc<dyn Fn(&Intrinsics) -> JsObject>;

/// Creates the blank instance once its prototype is known.
pub type Allocator = fn(JsObject) -> JsObject;

/// `GetPrototypeFromConstructor(constructor, intrinsicDefaultProto)`.
///
/// Uses `new_target`'s own `prototype` when it is an object. Anything
/// else (a non-object `new_target`, a missing or primitive `prototype`)
/// silently selects the default. Never fails.
pub fn get_prototype_from_constructor(
    new_target: &Value,
    intrinsics: &Intrinsics,
    default_prototype: &PrototypeResolver,
) -> JsObject {
    let explicit = new_target
        .as_object()
        .and_then(|constructor| constructor.get_own_property("prototype"))
        .and_then(|desc| desc.value.as_object().cloned());

    match explicit {
        Some(prototype) => prototype,
        None => default_prototype(intrinsics),
    }
}

/// `OrdinaryCreateFromConstructor(constructor, intrinsicDefaultProto)`.
pub fn ordinary_create_from_constructor(
    new_target: &Value,
    intrinsics: &Intrinsics,
    default_prototype: &PrototypeResolver,
    allocate: Allocator,
) -> JsObject {
    let prototype = get_prototype_from_constructor(new_target, intrinsics, default_prototype);
    allocate(prototype)
}
