//! Unit tests for the builtins component
//!
//! Exercises the reference host pieces through the public API.

mod test_agent;
mod test_intrinsics;
