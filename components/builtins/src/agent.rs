//! Reference host.
//!
//! [`Agent`] bundles a realm, a call stack and the last executed location,
//! and implements every collaborator trait the built-ins consume. An
//! interpreter either embeds it or provides its own [`Host`](crate::Host).

use std::rc::Rc;

use log::debug;

use core_types::{CallFrame, ErrorKind, JsError, JsObject, SourceLocation, Value};

use crate::call_stack::CallStack;
use crate::error::{ConstructResult, ErrorConstructor};
use crate::host::{CallStackView, RealmView, SourceTracker, StringCoercion};
use crate::options::AgentOptions;
use crate::realm::{Intrinsics, Realm};

/// Execution state for one evaluation context.
#[derive(Debug)]
pub struct Agent {
    realm: Realm,
    call_stack: CallStack,
    last_location: Option<SourceLocation>,
    options: AgentOptions,
}

impl Agent {
    /// Create an agent with default options
    pub fn new() -> Result<Self, JsError> {
        Self::with_options(AgentOptions::default())
    }

    /// Create an agent with a fresh realm
    pub fn with_options(options: AgentOptions) -> Result<Self, JsError> {
        Ok(Agent {
            realm: Realm::new()?,
            call_stack: CallStack::with_limit(options.stack_trace_limit),
            last_location: None,
            options,
        })
    }

    /// The agent's realm
    pub fn realm(&self) -> &Realm {
        &self.realm
    }

    /// The live call stack
    pub fn call_stack(&self) -> &CallStack {
        &self.call_stack
    }

    /// The agent's options
    pub fn options(&self) -> &AgentOptions {
        &self.options
    }

    /// The realm's constructor for `kind`
    pub fn error_constructor(&self, kind: ErrorKind) -> Rc<ErrorConstructor> {
        self.realm.intrinsics().error_constructor(kind).clone()
    }

    /// A location in the configured script
    pub fn location(&self, line: u32, column: u32) -> SourceLocation {
        SourceLocation::new(self.options.script_name.as_deref(), line, column)
    }

    /// Record that execution reached `location`
    pub fn execute_at(&mut self, location: SourceLocation) {
        self.last_location = Some(location);
    }

    /// Enter a function
    pub fn enter(&mut self, frame: CallFrame) {
        debug!("enter {} from {}", frame.function_name, frame.call_site);
        self.call_stack.push(frame);
    }

    /// Leave the innermost function
    pub fn leave(&mut self) -> Option<CallFrame> {
        let frame = self.call_stack.pop();
        if let Some(frame) = &frame {
            debug!("leave {}", frame.function_name);
        }
        frame
    }

    /// Run `body` inside a frame for `function`, entered from `call_site`.
    /// The frame is left again whatever `body` returns.
    pub fn with_frame<R>(
        &mut self,
        function: Option<JsObject>,
        name: &str,
        call_site: SourceLocation,
        body: impl FnOnce(&mut Self) -> R,
    ) -> R {
        self.enter(CallFrame::new(function, name, call_site.clone()));
        self.execute_at(call_site);
        let result = body(self);
        self.leave();
        result
    }

    /// Evaluate `new <kind>(...args)` written in script at `at`: the
    /// constructor becomes the innermost frame while it runs, as it would
    /// under an interpreter.
    pub fn construct_from_script(
        &mut self,
        kind: ErrorKind,
        args: &[Value],
        at: SourceLocation,
    ) -> ConstructResult<JsObject> {
        let constructor = self.error_constructor(kind);
        let function = constructor.function_object().clone();
        self.with_frame(Some(function), kind.name(), at, |agent| {
            constructor.construct(agent, args)
        })
    }
}

impl CallStackView for Agent {
    fn peek_top(&self) -> Option<&CallFrame> {
        self.call_stack.peek_top()
    }

    fn render_trace(&self, location: &SourceLocation, skip: usize) -> String {
        self.call_stack.render_trace(location, skip)
    }
}

impl SourceTracker for Agent {
    fn last_executed_location(&self) -> Option<SourceLocation> {
        self.last_location.clone()
    }
}

impl StringCoercion for Agent {
    fn to_string_coercion(&mut self, value: &Value) -> Result<String, JsError> {
        value.to_js_string()
    }
}

impl RealmView for Agent {
    fn intrinsics(&self) -> &Intrinsics {
        self.realm.intrinsics()
    }
}
