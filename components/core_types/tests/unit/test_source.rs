//! Unit tests for SourceLocation and CallFrame

use core_types::{CallFrame, JsObject, SourceLocation};

#[cfg(test)]
mod source_location_tests {
    use super::*;

    #[test]
    fn test_display_with_source() {
        let loc = SourceLocation::new(Some("app.js"), 25, 10);
        assert_eq!(loc.to_string(), "app.js:25:10");
    }

    #[test]
    fn test_display_without_source() {
        let loc = SourceLocation::new(None, 3, 7);
        assert_eq!(loc.to_string(), "<anonymous>:3:7");
    }

    #[test]
    fn test_equality() {
        assert_eq!(
            SourceLocation::new(Some("a.js"), 1, 2),
            SourceLocation::new(Some("a.js"), 1, 2)
        );
        assert_ne!(
            SourceLocation::new(Some("a.js"), 1, 2),
            SourceLocation::new(Some("b.js"), 1, 2)
        );
    }
}

#[cfg(test)]
mod call_frame_tests {
    use super::*;

    #[test]
    fn test_call_frame_fields() {
        let callee = JsObject::function(None);
        let frame = CallFrame::new(
            Some(callee.clone()),
            "innerFunction",
            SourceLocation::new(Some("app.js"), 30, 5),
        );

        assert_eq!(frame.function_name, "innerFunction");
        assert_eq!(frame.call_site.line, 30);
        assert!(frame.is_function(&callee));
    }

    #[test]
    fn test_cloned_frame_keeps_identity() {
        let callee = JsObject::function(None);
        let frame = CallFrame::new(Some(callee.clone()), "f", SourceLocation::new(None, 1, 1));
        let copy = frame.clone();
        assert!(copy.is_function(&callee));
    }
}
