use crate::error::HarnessError;
use crate::fixture::Fixture;
use crate::harness::load_fixture;
use builtins::{JsResult, JsValue, Realm};

const PATH: &str = "built-ins/Object/isFrozen/15.2.3.12-2-c-1.js";
const SOURCE: &str = include_str!("../../fixtures/built-ins/Object/isFrozen/15.2.3.12-2-c-1.js");

/// `Object.isFrozen` is false for a non-extensible object with an own
/// configurable data property
pub fn object_is_frozen_with_configurable_property() -> Result<Fixture, HarnessError> {
    load_fixture(PATH, SOURCE, testcase)
}

fn testcase() -> JsResult<JsValue> {
    let realm = Realm::new();
    let object = realm.object_constructor();

    let obj = realm.object();
    let attributes = realm.object();
    attributes.put("value", 20.0)?;
    attributes.put("writable", false)?;
    attributes.put("configurable", true)?;
    object.invoke("defineProperty", &[obj.clone(), "foo".into(), attributes])?;

    object.invoke("preventExtensions", &[obj.clone()])?;
    let frozen = object.invoke("isFrozen", &[obj])?;
    Ok(JsValue::boolean(!frozen.to_boolean()))
}
