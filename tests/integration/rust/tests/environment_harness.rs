//! Evaluation environment semantics observed through the Case Runner

use builtins::{ArrayPrototype, JsError, JsValue, PropertyDescriptor, Realm};
use conformance_harness::{run_test_case, Outcome};
use core_types::ErrorKind;
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn test_value_of_runs_once_per_conversion() {
    let realm = Realm::new();
    let calls = Rc::new(Cell::new(0));
    let obj = realm.object();
    let counter = calls.clone();
    obj.put(
        "valueOf",
        realm.function(move |_, _| {
            counter.set(counter.get() + 1);
            Ok(JsValue::number(2.0))
        }),
    )
    .unwrap();

    assert_eq!(obj.to_number().unwrap(), 2.0);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_value_of_not_called_for_empty_array_like() {
    let realm = Realm::new();
    let arr = realm.object();
    arr.put("length", 0.0).unwrap();
    let from_index = realm.object();
    from_index
        .put(
            "valueOf",
            realm.function(|_, _| Err(JsError::new(ErrorKind::Error, "should not run"))),
        )
        .unwrap();

    let outcome = run_test_case(|| {
        ArrayPrototype::index_of(&arr, &JsValue::Undefined, Some(&from_index)).map(|i| i == -1)
    });
    assert_eq!(outcome, Outcome::Pass);
}

#[test]
fn test_throwing_value_of_becomes_failure() {
    let realm = Realm::new();
    let arr = realm.array(vec![JsValue::number(1.0)]);
    let from_index = realm.object();
    from_index
        .put(
            "valueOf",
            realm.function(|_, _| Err(JsError::new(ErrorKind::Error, "boom"))),
        )
        .unwrap();

    let outcome = run_test_case(|| arr.invoke("indexOf", &[JsValue::number(1.0), from_index.clone()]));
    assert_eq!(outcome, Outcome::Fail("test case threw: Error: boom".to_string()));
}

#[test]
fn test_array_length_tracks_defined_index() {
    let realm = Realm::new();
    let arr = realm.array(Vec::new());
    arr.define_own_property("7", &PropertyDescriptor::new().value(1.0), true)
        .unwrap();
    assert_eq!(arr.get("length").unwrap(), JsValue::number(8.0));
}
