use crate::error::HarnessError;
use crate::fixture::Fixture;
use crate::harness::load_fixture;
use builtins::{JsResult, JsValue, Realm};

const PATH: &str = "built-ins/Array/prototype/indexOf/15.4.4.14-9-a-2.js";
const SOURCE: &str = include_str!("../../fixtures/built-ins/Array/prototype/indexOf/15.4.4.14-9-a-2.js");

/// `Array.prototype.indexOf` on an array-like object sees a property added
/// while `fromIndex` is being converted
pub fn array_index_of_sees_added_properties() -> Result<Fixture, HarnessError> {
    load_fixture(PATH, SOURCE, testcase)
}

fn testcase() -> JsResult<JsValue> {
    let realm = Realm::new();

    let arr = realm.object();
    arr.put("length", 30.0)?;
    let target = realm.function(|_, _| Ok(JsValue::Undefined));

    let from_index = realm.object();
    let value_of = {
        let arr = arr.clone();
        let target = target.clone();
        realm.function(move |_, _| {
            arr.put("4", target.clone())?;
            Ok(JsValue::number(3.0))
        })
    };
    from_index.put("valueOf", value_of)?;

    let index_of = realm.array_prototype().get("indexOf")?;
    let found = index_of.call(&arr, &[target, from_index])?;
    Ok(JsValue::boolean(found.strict_equals(&JsValue::number(4.0))))
}
