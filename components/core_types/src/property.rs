//! Data property descriptors.

use crate::Value;

/// The `{value, writable, enumerable, configurable}` attribute set of a
/// data property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDescriptor {
    /// Property value
    pub value: Value,
    /// Whether assignment may change the value
    pub writable: bool,
    /// Whether the property shows up in enumeration
    pub enumerable: bool,
    /// Whether the property may be deleted or have its attributes changed
    pub configurable: bool,
}

impl PropertyDescriptor {
    /// Create a descriptor with explicit attributes
    pub fn new(value: Value, writable: bool, enumerable: bool, configurable: bool) -> Self {
        PropertyDescriptor {
            value,
            writable,
            enumerable,
            configurable,
        }
    }

    /// Plain assignment semantics: writable, enumerable, configurable
    pub fn data(value: Value) -> Self {
        PropertyDescriptor::new(value, true, true, true)
    }

    /// Writable and configurable but hidden from enumeration, the shape of
    /// built-in methods and of error instance properties
    pub fn non_enumerable(value: Value) -> Self {
        PropertyDescriptor::new(value, true, false, true)
    }

    /// Read-only but configurable, e.g. a function's `length` and `name`
    pub fn configurable_only(value: Value) -> Self {
        PropertyDescriptor::new(value, false, false, true)
    }

    /// No attribute set, e.g. a constructor's `prototype`
    pub fn frozen(value: Value) -> Self {
        PropertyDescriptor::new(value, false, false, false)
    }

    /// True when both descriptors carry the same attributes and a
    /// `SameValue`-equal value
    pub fn same_as(&self, other: &PropertyDescriptor) -> bool {
        self.writable == other.writable
            && self.enumerable == other.enumerable
            && self.configurable == other.configurable
            && self.value.same_value(&other.value)
    }
}
