//! Integration test suite for Corten JavaScript Runtime
//!
//! This crate drives the Error built-ins the way an interpreter would:
//! entering and leaving user functions, tracking the executed position,
//! throwing and catching completions.

use std::collections::HashMap;

use builtins::{Agent, AgentOptions, CallFrame, ErrorKind, JsError, JsObject, Value};

/// Re-export components for test convenience
pub mod components {
    pub use builtins;
    pub use core_types;
}

/// A miniature script driver over an [`Agent`].
///
/// Function identities are stable per name, so a frame entered twice for
/// `"f"` refers to the same function object.
pub struct ScriptRunner {
    agent: Agent,
    functions: HashMap<String, JsObject>,
}

impl ScriptRunner {
    /// Create a runner whose locations belong to `script_name`
    pub fn new(script_name: &str) -> Result<Self, JsError> {
        let options = AgentOptions::default().with_script_name(script_name);
        Ok(ScriptRunner {
            agent: Agent::with_options(options)?,
            functions: HashMap::new(),
        })
    }

    /// The underlying agent
    pub fn agent(&mut self) -> &mut Agent {
        &mut self.agent
    }

    /// The function object declared as `name`
    pub fn function(&mut self, name: &str) -> JsObject {
        self.functions
            .entry(name.to_string())
            .or_insert_with(|| JsObject::function(None))
            .clone()
    }

    /// Execute a statement at `line:column`
    pub fn step(&mut self, line: u32, column: u32) {
        let location = self.agent.location(line, column);
        self.agent.execute_at(location);
    }

    /// Call user function `name` from `line:column`. The frame is left
    /// whether `body` completes normally or throws.
    pub fn call<R>(
        &mut self,
        name: &str,
        line: u32,
        column: u32,
        body: impl FnOnce(&mut Self) -> Result<R, JsError>,
    ) -> Result<R, JsError> {
        let function = self.function(name);
        let call_site = self.agent.location(line, column);
        self.agent.enter(CallFrame::new(Some(function), name, call_site.clone()));
        self.agent.execute_at(call_site);
        let result = body(self);
        self.agent.leave();
        result
    }

    /// `new <kind>(...args)` at `line:column`
    pub fn new_error(&mut self, kind: ErrorKind, args: &[Value], line: u32, column: u32) -> Result<JsObject, JsError> {
        let at = self.agent.location(line, column);
        Ok(self.agent.construct_from_script(kind, args, at)?)
    }

    /// `throw new <kind>(...args)` at `line:column`
    pub fn throw_new<R>(&mut self, kind: ErrorKind, args: &[Value], line: u32, column: u32) -> Result<R, JsError> {
        let error = self.new_error(kind, args, line, column)?;
        Err(JsError::thrown(Value::Object(error)))
    }

    /// The value a `catch` clause binds for `err`. Engine-raised errors
    /// are materialised as instances of their kind.
    pub fn catch(&mut self, err: JsError) -> Result<Value, JsError> {
        match err {
            JsError::Thrown(value) => Ok(value),
            JsError::Native { kind, message } => {
                let ctor = self.agent.error_constructor(kind);
                let error = ctor.construct(&mut self.agent, &[Value::string(message)])?;
                Ok(Value::Object(error))
            }
        }
    }
}

/// `{ cause: value }`
pub fn cause_options(value: Value) -> Value {
    let options = JsObject::ordinary(None);
    options.set("cause", value);
    Value::Object(options)
}
