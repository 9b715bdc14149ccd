//! Ordinary objects.
//!
//! A [`JsObject`] is a cheap, clonable handle; clones refer to the same
//! object and compare equal with [`JsObject::ptr_eq`]. Only data
//! properties are modelled.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::{JsError, PropertyDescriptor, Value};

/// Which internal slots an object was allocated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// No extra internal slots
    Ordinary,
    /// Carries `[[ErrorData]]`
    Error,
    /// A function object
    Function,
}

#[derive(Debug)]
struct ObjectData {
    kind: ObjectKind,
    prototype: Option<JsObject>,
    properties: HashMap<String, PropertyDescriptor>,
    /// Property keys in insertion order
    keys: Vec<String>,
    extensible: bool,
}

/// Shared handle to a JavaScript object.
#[derive(Clone)]
pub struct JsObject(Rc<RefCell<ObjectData>>);

impl JsObject {
    /// Allocate an empty object of the given kind.
    ///
    /// The prototype link is fixed for the object's lifetime.
    pub fn new(kind: ObjectKind, prototype: Option<JsObject>) -> Self {
        JsObject(Rc::new(RefCell::new(ObjectData {
            kind,
            prototype,
            properties: HashMap::new(),
            keys: Vec::new(),
            extensible: true,
        })))
    }

    /// Allocate an ordinary object
    pub fn ordinary(prototype: Option<JsObject>) -> Self {
        JsObject::new(ObjectKind::Ordinary, prototype)
    }

    /// Allocate an object with the `[[ErrorData]]` slot
    pub fn error_instance(prototype: JsObject) -> Self {
        JsObject::new(ObjectKind::Error, Some(prototype))
    }

    /// Allocate a function object
    pub fn function(prototype: Option<JsObject>) -> Self {
        JsObject::new(ObjectKind::Function, prototype)
    }

    /// Identity comparison
    pub fn ptr_eq(&self, other: &JsObject) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// The kind of internal slots this object carries
    pub fn kind(&self) -> ObjectKind {
        self.0.borrow().kind
    }

    /// True for objects carrying `[[ErrorData]]`
    pub fn is_error(&self) -> bool {
        self.kind() == ObjectKind::Error
    }

    /// The `[[Prototype]]` link
    pub fn prototype(&self) -> Option<JsObject> {
        self.0.borrow().prototype.clone()
    }

    /// Whether new properties may be added
    pub fn is_extensible(&self) -> bool {
        self.0.borrow().extensible
    }

    /// Forbid adding new properties
    pub fn prevent_extensions(&self) {
        self.0.borrow_mut().extensible = false;
    }

    /// Look up an own property descriptor
    pub fn get_own_property(&self, key: &str) -> Option<PropertyDescriptor> {
        self.0.borrow().properties.get(key).cloned()
    }

    /// Whether `key` is an own property
    pub fn has_own_property(&self, key: &str) -> bool {
        self.0.borrow().properties.contains_key(key)
    }

    /// Own property keys in insertion order
    pub fn own_keys(&self) -> Vec<String> {
        self.0.borrow().keys.clone()
    }

    /// `[[Get]]`: walks the prototype chain, `undefined` when absent.
    pub fn get(&self, key: &str) -> Value {
        let mut current = Some(self.clone());
        while let Some(object) = current {
            if let Some(desc) = object.get_own_property(key) {
                return desc.value;
            }
            current = object.prototype();
        }
        Value::Undefined
    }

    /// `[[Set]]` for data properties. Returns false when the assignment is
    /// rejected by a read-only own or inherited property, or by a
    /// non-extensible receiver.
    pub fn set(&self, key: &str, value: Value) -> bool {
        if let Some(mut own) = self.get_own_property(key) {
            if !own.writable {
                return false;
            }
            own.value = value;
            return self.define_own_property(key, own);
        }
        let mut ancestor = self.prototype();
        while let Some(object) = ancestor {
            if let Some(inherited) = object.get_own_property(key) {
                if !inherited.writable {
                    return false;
                }
                break;
            }
            ancestor = object.prototype();
        }
        self.define_own_property(key, PropertyDescriptor::data(value))
    }

    /// `[[Delete]]`: removes a configurable own property
    pub fn delete(&self, key: &str) -> bool {
        let mut data = self.0.borrow_mut();
        let configurable = data.properties.get(key).map(|desc| desc.configurable);
        match configurable {
            None => true,
            Some(false) => false,
            Some(true) => {
                data.properties.remove(key);
                data.keys.retain(|k| k != key);
                true
            }
        }
    }

    /// `[[DefineOwnProperty]]` restricted to data descriptors.
    ///
    /// Adding requires extensibility. Changing an existing non-configurable
    /// property may not make it configurable, flip its enumerability, or
    /// change a read-only value.
    pub fn define_own_property(&self, key: &str, desc: PropertyDescriptor) -> bool {
        let mut data = self.0.borrow_mut();
        match data.properties.get(key).cloned() {
            None => {
                if !data.extensible {
                    return false;
                }
                data.keys.push(key.to_string());
            }
            Some(current) if !current.configurable => {
                if current.same_as(&desc) {
                    return true;
                }
                if desc.configurable || desc.enumerable != current.enumerable {
                    return false;
                }
                if !current.writable && (desc.writable || !desc.value.same_value(&current.value)) {
                    return false;
                }
            }
            Some(_) => {}
        }
        data.properties.insert(key.to_string(), desc);
        true
    }

    /// `DefinePropertyOrThrow`: a rejected definition becomes a `TypeError`
    pub fn define_property_or_throw(&self, key: &str, desc: PropertyDescriptor) -> Result<(), JsError> {
        if self.define_own_property(key, desc) {
            return Ok(());
        }
        if self.has_own_property(key) {
            Err(JsError::type_error(format!("Cannot redefine property: {}", key)))
        } else {
            Err(JsError::type_error(format!(
                "Cannot define property {}, object is not extensible",
                key
            )))
        }
    }
}

// Objects routinely form cycles (constructor <-> prototype), so Debug
// prints identity only.
impl fmt::Debug for JsObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JsObject({:?} @ {:p})", self.kind(), Rc::as_ptr(&self.0))
    }
}
