//! Reference call stack.
//!
//! A plain ordered list of [`CallFrame`]s, innermost last, with the trace
//! renderer used by `Error` construction.

use core_types::{CallFrame, SourceLocation};

use crate::host::CallStackView;

/// Stack of active invocations.
#[derive(Debug, Clone, Default)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    /// Maximum number of rendered trace lines, `None` for no limit
    limit: Option<usize>,
}

impl CallStack {
    /// Create an empty call stack without a trace limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty call stack whose rendered traces keep at most
    /// `limit` lines
    pub fn with_limit(limit: Option<usize>) -> Self {
        CallStack {
            frames: Vec::new(),
            limit,
        }
    }

    /// Enter a frame
    pub fn push(&mut self, frame: CallFrame) {
        self.frames.push(frame);
    }

    /// Leave the innermost frame
    pub fn pop(&mut self) -> Option<CallFrame> {
        self.frames.pop()
    }

    /// Number of active frames
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Active frames, outermost first
    pub fn frames(&self) -> &[CallFrame] {
        &self.frames
    }

    /// Render the trace, one line per visible frame plus one for the
    /// script body:
    ///
    /// ```text
    ///     at inner (app.js:3:9)
    ///     at outer (app.js:7:5)
    ///     at app.js:9:1
    /// ```
    ///
    /// The innermost visible frame shows `location`. Every outer frame
    /// shows the call site recorded on the frame it called. The limit caps
    /// the frame lines only; the script line is always present.
    pub fn render(&self, location: &SourceLocation, skip: usize) -> String {
        let visible = &self.frames[..self.frames.len().saturating_sub(skip)];
        let shown = self.limit.map_or(visible.len(), |limit| limit.min(visible.len()));

        let mut lines = Vec::with_capacity(shown + 1);
        let mut position = location;
        for (i, frame) in visible.iter().rev().enumerate() {
            if i < shown {
                lines.push(format!("    at {} ({})", frame.function_name, position));
            }
            position = &frame.call_site;
        }
        lines.push(format!("    at {}", position));
        lines.join("\n")
    }
}

impl CallStackView for CallStack {
    fn peek_top(&self) -> Option<&CallFrame> {
        self.frames.last()
    }

    fn render_trace(&self, location: &SourceLocation, skip: usize) -> String {
        self.render(location, skip)
    }
}
