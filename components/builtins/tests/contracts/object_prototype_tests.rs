//! Contract tests for ObjectPrototype

use builtins::{JsValue, ObjectPrototype, Realm};

#[test]
fn test_has_own_property_exists() {
    let obj = JsValue::object();
    obj.put("foo", 42.0).unwrap();

    let result = ObjectPrototype::has_own_property(&obj, &JsValue::string("foo"));
    assert!(result.unwrap());
}

#[test]
fn test_has_own_property_ignores_prototype() {
    let realm = Realm::new();
    let obj = realm.object();

    // hasOwnProperty itself lives on %ObjectPrototype%
    let result = ObjectPrototype::has_own_property(&obj, &JsValue::string("hasOwnProperty"));
    assert!(!result.unwrap());
}

#[test]
fn test_to_string_tags() {
    let realm = Realm::new();
    assert_eq!(ObjectPrototype::to_string(&realm.object()).unwrap(), "[object Object]");
    assert_eq!(
        ObjectPrototype::to_string(&realm.function(|_, _| Ok(JsValue::Undefined))).unwrap(),
        "[object Function]"
    );
    assert_eq!(ObjectPrototype::to_string(&JsValue::Undefined).unwrap(), "[object Undefined]");
    assert_eq!(ObjectPrototype::to_string(&JsValue::string("s")).unwrap(), "[object String]");
}

#[test]
fn test_value_of() {
    let obj = JsValue::object();
    let result = ObjectPrototype::value_of(&obj).unwrap();
    assert!(result.strict_equals(&obj));
    assert!(ObjectPrototype::value_of(&JsValue::Null).is_err());
}
