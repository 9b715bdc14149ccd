//! Core JavaScript value types, object model and error handling.
//!
//! This crate provides the foundational types shared by the runtime
//! components: value representation, a small ordinary-object model with
//! property descriptors, source locations and call frames, and the engine
//! level error type.
//!
//! # Overview
//!
//! - [`Value`] - Tagged representation of JavaScript values
//! - [`JsObject`] - Shared handle to an ordinary object
//! - [`PropertyDescriptor`] - Data property attributes
//! - [`JsError`] - Abrupt completion raised by engine operations
//! - [`ErrorKind`] - The native error kinds
//! - [`SourceLocation`] / [`CallFrame`] - Call stack bookkeeping
//!
//! # Examples
//!
//! ```
//! use core_types::{JsObject, PropertyDescriptor, Value};
//!
//! let proto = JsObject::ordinary(None);
//! let obj = JsObject::ordinary(Some(proto.clone()));
//! obj.define_property_or_throw("answer", PropertyDescriptor::data(Value::Smi(42)))
//!     .unwrap();
//!
//! assert!(obj.prototype().unwrap().ptr_eq(&proto));
//! assert_eq!(obj.get("answer"), Value::Smi(42));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod object;
mod property;
mod source;
mod value;

pub use error::{ErrorKind, JsError};
pub use object::{JsObject, ObjectKind};
pub use property::PropertyDescriptor;
pub use source::{CallFrame, SourceLocation};
pub use value::{JsSymbol, Value};
