//! Unit tests for Agent as a host

use builtins::{
    Agent, CallFrame, CallStackView, ErrorKind, Host, JsObject, RealmView, SourceLocation,
    SourceTracker, StringCoercion, Value,
};

fn as_host(agent: &mut Agent) -> &mut dyn Host {
    agent
}

#[test]
fn test_fresh_agent_has_no_location_or_frames() {
    let agent = Agent::new().unwrap();
    assert!(agent.last_executed_location().is_none());
    assert!(agent.peek_top().is_none());
    assert_eq!(agent.call_stack().depth(), 0);
}

#[test]
fn test_enter_and_leave_track_the_top_frame() {
    let mut agent = Agent::new().unwrap();
    let f = JsObject::function(None);
    agent.enter(CallFrame::new(Some(f.clone()), "f", SourceLocation::new(None, 1, 1)));
    agent.enter(CallFrame::new(None, "g", SourceLocation::new(None, 2, 1)));

    assert_eq!(agent.peek_top().unwrap().function_name, "g");
    assert_eq!(agent.leave().unwrap().function_name, "g");
    assert!(agent.peek_top().unwrap().is_function(&f));
    agent.leave();
    assert!(agent.leave().is_none());
}

#[test]
fn test_host_trait_object_round_trip() {
    let mut agent = Agent::new().unwrap();
    agent.execute_at(SourceLocation::new(Some("a.js"), 4, 2));
    let host = as_host(&mut agent);

    assert_eq!(host.to_string_coercion(&Value::Smi(7)).unwrap(), "7");
    assert_eq!(
        host.last_executed_location(),
        Some(SourceLocation::new(Some("a.js"), 4, 2))
    );
    assert_eq!(
        host.render_trace(&SourceLocation::new(Some("a.js"), 4, 2), 0),
        "    at a.js:4:2"
    );
    let proto = host.intrinsics().error_prototype(ErrorKind::Error);
    assert_eq!(proto.get("name"), Value::string("Error"));
}

#[test]
fn test_agents_do_not_share_intrinsics() {
    let a = Agent::new().unwrap();
    let b = Agent::new().unwrap();
    assert!(!a
        .error_constructor(ErrorKind::Error)
        .function_object()
        .ptr_eq(b.error_constructor(ErrorKind::Error).function_object()));
}
