//! Unit tests for the error intrinsics graph

use builtins::{Agent, ErrorKind, ErrorPrototype, Value};

#[test]
fn test_instance_chain_reaches_object_prototype() {
    let mut agent = Agent::new().unwrap();
    let ctor = agent.error_constructor(ErrorKind::TypeError);
    let o = ctor.construct(&mut agent, &[]).unwrap();

    let intrinsics = agent.realm().intrinsics();
    let type_error_proto = o.prototype().unwrap();
    let error_proto = type_error_proto.prototype().unwrap();
    let object_proto = error_proto.prototype().unwrap();

    assert!(type_error_proto.ptr_eq(&intrinsics.error_prototype(ErrorKind::TypeError)));
    assert!(error_proto.ptr_eq(&intrinsics.error_prototype(ErrorKind::Error)));
    assert!(object_proto.ptr_eq(intrinsics.object_prototype()));
    assert!(object_proto.prototype().is_none());
}

#[test]
fn test_constructor_is_reachable_from_instances() {
    let mut agent = Agent::new().unwrap();
    for kind in ErrorKind::ALL {
        let ctor = agent.error_constructor(kind);
        let o = ctor.construct(&mut agent, &[]).unwrap();
        assert_eq!(o.get("constructor"), Value::Object(ctor.function_object().clone()));
    }
}

#[test]
fn test_to_string_of_each_kind() {
    let mut agent = Agent::new().unwrap();
    for kind in ErrorKind::ALL {
        let ctor = agent.error_constructor(kind);
        let o = ctor.construct(&mut agent, &[Value::string("m")]).unwrap();
        let s = ErrorPrototype::to_string(&mut agent, &Value::Object(o)).unwrap();
        assert_eq!(s, Value::string(format!("{}: m", kind.name())));
    }
}

#[test]
fn test_constructor_functions_are_functions() {
    let agent = Agent::new().unwrap();
    for kind in ErrorKind::ALL {
        let f = agent.error_constructor(kind).function_object().clone();
        assert_eq!(Value::Object(f).type_of(), "function");
    }
}
