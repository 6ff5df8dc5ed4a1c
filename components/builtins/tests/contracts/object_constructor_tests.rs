//! Contract tests for ObjectConstructor

use builtins::{JsValue, ObjectConstructor, PropertyDescriptor, Realm};

fn attributes(realm: &Realm, fields: &[(&str, JsValue)]) -> JsValue {
    let obj = realm.object();
    for (name, value) in fields {
        obj.put(name, value.clone()).unwrap();
    }
    obj
}

#[test]
fn test_is_frozen_false_with_configurable_data_property() {
    let realm = Realm::new();
    let obj = realm.object();
    let attrs = attributes(
        &realm,
        &[
            ("value", JsValue::number(20.0)),
            ("writable", JsValue::boolean(false)),
            ("configurable", JsValue::boolean(true)),
        ],
    );
    ObjectConstructor::define_property(&obj, &JsValue::string("foo"), &attrs).unwrap();
    ObjectConstructor::prevent_extensions(&obj).unwrap();

    assert!(!ObjectConstructor::is_frozen(&obj).unwrap());
}

#[test]
fn test_is_frozen_false_with_writable_data_property() {
    let realm = Realm::new();
    let obj = realm.object();
    let attrs = attributes(
        &realm,
        &[
            ("value", JsValue::number(20.0)),
            ("writable", JsValue::boolean(true)),
            ("configurable", JsValue::boolean(false)),
        ],
    );
    ObjectConstructor::define_property(&obj, &JsValue::string("foo"), &attrs).unwrap();
    ObjectConstructor::prevent_extensions(&obj).unwrap();

    assert!(!ObjectConstructor::is_frozen(&obj).unwrap());
}

#[test]
fn test_is_frozen_true_with_non_configurable_accessor() {
    let realm = Realm::new();
    let obj = realm.object();
    let getter = realm.function(|_, _| Ok(JsValue::number(1.0)));
    let attrs = attributes(&realm, &[("get", getter)]);
    ObjectConstructor::define_property(&obj, &JsValue::string("foo"), &attrs).unwrap();
    ObjectConstructor::prevent_extensions(&obj).unwrap();

    assert!(ObjectConstructor::is_frozen(&obj).unwrap());
}

#[test]
fn test_is_frozen_false_while_extensible() {
    let realm = Realm::new();
    let obj = realm.object();
    ObjectConstructor::freeze(&obj).unwrap();
    assert!(ObjectConstructor::is_frozen(&obj).unwrap());

    let open = realm.object();
    assert!(!ObjectConstructor::is_frozen(&open).unwrap());
}

#[test]
fn test_define_property_reads_attributes_through_getters() {
    let realm = Realm::new();
    let attrs = realm.object();
    let value_getter = PropertyDescriptor::new()
        .getter(realm.function(|_, _| Ok(JsValue::string("computed"))))
        .enumerable(true)
        .configurable(true);
    attrs.define_own_property("value", &value_getter, true).unwrap();

    let obj = realm.object();
    ObjectConstructor::define_property(&obj, &JsValue::string("x"), &attrs).unwrap();
    assert_eq!(obj.get("x").unwrap(), JsValue::string("computed"));
}

#[test]
fn test_define_property_reads_inherited_attributes() {
    let realm = Realm::new();
    let proto = realm.object();
    proto.put("configurable", true).unwrap();
    let attrs = JsValue::object_with_proto(&proto);

    let obj = realm.object();
    ObjectConstructor::define_property(&obj, &JsValue::string("x"), &attrs).unwrap();
    let desc = ObjectConstructor::get_own_property_descriptor(&obj, &JsValue::string("x"))
        .unwrap()
        .unwrap();
    assert_eq!(desc.configurable, Some(true));
    assert_eq!(desc.value, Some(JsValue::Undefined));
}

#[test]
fn test_define_property_on_non_extensible_object_throws() {
    let realm = Realm::new();
    let obj = realm.object();
    ObjectConstructor::prevent_extensions(&obj).unwrap();
    let attrs = attributes(&realm, &[("value", JsValue::number(1.0))]);

    let err = ObjectConstructor::define_property(&obj, &JsValue::string("x"), &attrs).unwrap_err();
    assert_eq!(err.to_string(), "TypeError: Cannot redefine property: x");
}

#[test]
fn test_define_property_with_non_callable_getter_throws() {
    let realm = Realm::new();
    let attrs = attributes(&realm, &[("get", JsValue::number(1.0))]);
    let result = ObjectConstructor::define_property(&realm.object(), &JsValue::string("x"), &attrs);
    assert!(result.is_err());
}

#[test]
fn test_define_property_converts_key_to_string() {
    let realm = Realm::new();
    let obj = realm.object();
    let attrs = attributes(&realm, &[("value", JsValue::boolean(true))]);
    ObjectConstructor::define_property(&obj, &JsValue::number(4.0), &attrs).unwrap();
    assert!(obj.has_own("4"));
}

#[test]
fn test_is_extensible() {
    let realm = Realm::new();
    let obj = realm.object();
    assert!(ObjectConstructor::is_extensible(&obj).unwrap());
    ObjectConstructor::prevent_extensions(&obj).unwrap();
    assert!(!ObjectConstructor::is_extensible(&obj).unwrap());
    assert!(ObjectConstructor::is_extensible(&JsValue::Null).is_err());
}

#[test]
fn test_is_frozen_through_realm_intrinsic() {
    let realm = Realm::new();
    let object = realm.object_constructor();
    let obj = realm.object();
    object.invoke("preventExtensions", &[obj.clone()]).unwrap();
    let frozen = object.invoke("isFrozen", &[obj]).unwrap();
    assert_eq!(frozen, JsValue::boolean(true));
}

#[test]
fn test_large_number_key_uses_shortest_digits() {
    let realm = Realm::new();
    let obj = realm.object();
    let attrs = attributes(&realm, &[("value", JsValue::number(1.0))]);
    ObjectConstructor::define_property(&obj, &JsValue::number(1.2345678901234568e20), &attrs)
        .unwrap();

    assert!(obj.has_own("123456789012345680000"));
    assert!(!obj.has_own("123456789012345683968"));
}
