//! ECMAScript Error built-ins
//!
//! This crate provides the `Error` constructor family for a JavaScript runtime:
//! - `Error` and the native errors (TypeError, RangeError, ...)
//! - `message`, `stack` and `cause` installation with exact attributes
//! - Error.prototype and its `toString`
//! - The collaborator traits the constructors consume, with reference
//!   implementations (call stack, realm, agent)
//!
//! # Example
//!
//! ```
//! use builtins::{Agent, ErrorKind, JsObject, Value};
//!
//! let mut agent = Agent::new().unwrap();
//! let at = agent.location(1, 7);
//!
//! // new Error("root")
//! let root = agent
//!     .construct_from_script(ErrorKind::Error, &[Value::string("root")], at.clone())
//!     .unwrap();
//!
//! // new TypeError("boom", { cause: root })
//! let options = JsObject::ordinary(None);
//! options.set("cause", Value::Object(root.clone()));
//! let error = agent
//!     .construct_from_script(
//!         ErrorKind::TypeError,
//!         &[Value::string("boom"), Value::Object(options)],
//!         at,
//!     )
//!     .unwrap();
//!
//! assert_eq!(error.get("message"), Value::string("boom"));
//! assert_eq!(error.get("name"), Value::string("TypeError"));
//! assert_eq!(error.get("cause"), Value::Object(root));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod agent;
pub mod call_stack;
pub mod cause;
pub mod error;
pub mod error_prototype;
pub mod function;
pub mod host;
pub mod options;
pub mod prototype;
pub mod realm;
pub mod stack_trace;

// Re-export main types for convenience
pub use agent::Agent;
pub use call_stack::CallStack;
pub use error::{ConstructError, ConstructResult, ErrorConstructor};
pub use error_prototype::ErrorPrototype;
pub use function::{Callable, Constructor};
pub use host::{CallStackView, Host, RealmView, SourceTracker, StringCoercion};
pub use options::AgentOptions;
pub use prototype::{Allocator, PrototypeResolver};
pub use realm::{Intrinsics, Realm};

pub use core_types::{CallFrame, ErrorKind, JsError, JsObject, PropertyDescriptor, SourceLocation, Value};
