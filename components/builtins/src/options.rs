//! Agent configuration.

use serde::Deserialize;

/// Tunables for an [`Agent`](crate::Agent).
///
/// Every field has a default, so embedders can deserialize partial
/// configuration:
///
/// ```
/// use builtins::AgentOptions;
///
/// let options = AgentOptions::default();
/// assert_eq!(options.stack_trace_limit, None);
/// assert_eq!(options.script_name, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AgentOptions {
    /// Maximum number of frame lines in a rendered `stack`, `None` for no
    /// limit. The closing script line is not counted and always kept.
    pub stack_trace_limit: Option<usize>,
    /// Source name recorded for locations created by the agent
    pub script_name: Option<String>,
}

impl AgentOptions {
    /// Set the trace limit
    pub fn with_stack_trace_limit(mut self, limit: usize) -> Self {
        self.stack_trace_limit = Some(limit);
        self
    }

    /// Set the script name
    pub fn with_script_name(mut self, name: impl Into<String>) -> Self {
        self.script_name = Some(name.into());
        self
    }
}
