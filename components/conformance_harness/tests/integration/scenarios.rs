//! Case Runner scenarios against the evaluation environment

use builtins::{ArrayPrototype, JsValue, ObjectConstructor, Realm};
use conformance_harness::{run_test_case, Outcome};
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn test_index_of_sees_property_added_by_value_of() {
    let outcome = run_test_case(|| {
        let realm = Realm::new();
        let arr = realm.object();
        arr.put("length", 30.0)?;
        let target = realm.function(|_, _| Ok(JsValue::Undefined));

        let calls = Rc::new(Cell::new(0));
        let from_index = realm.object();
        let value_of = {
            let (arr, target, calls) = (arr.clone(), target.clone(), calls.clone());
            realm.function(move |_, _| {
                calls.set(calls.get() + 1);
                arr.put("4", target.clone())?;
                Ok(JsValue::number(3.0))
            })
        };
        from_index.put("valueOf", value_of)?;

        let found = ArrayPrototype::index_of(&arr, &target, Some(&from_index))?;
        Ok::<_, builtins::JsError>(found == 4 && calls.get() == 1)
    });
    assert_eq!(outcome, Outcome::Pass);
}

#[test]
fn test_is_frozen_with_configurable_property() {
    let outcome = run_test_case(|| {
        let realm = Realm::new();
        let obj = realm.object();
        let attributes = realm.object();
        attributes.put("value", 20.0)?;
        attributes.put("writable", false)?;
        attributes.put("configurable", true)?;
        ObjectConstructor::define_property(&obj, &"foo".into(), &attributes)?;
        ObjectConstructor::prevent_extensions(&obj)?;
        Ok::<_, builtins::JsError>(!ObjectConstructor::is_frozen(&obj)?)
    });
    assert_eq!(outcome, Outcome::Pass);
}

#[test]
fn test_returning_false_fails() {
    let outcome = run_test_case(|| Ok::<_, builtins::JsError>(JsValue::boolean(false)));
    assert_eq!(outcome, Outcome::Fail("test case returned false".to_string()));
}

#[test]
fn test_raising_fails_and_runner_returns() {
    let outcome = run_test_case(|| {
        let realm = Realm::new();
        let not_a_function = realm.object();
        not_a_function.call(&JsValue::Undefined, &[])
    });
    assert_eq!(
        outcome,
        Outcome::Fail("test case threw: TypeError: object is not a function".to_string())
    );
}
