//! Unit tests for include resolution and the harness

use builtins::{JsError, JsValue};
use conformance_harness::{
    load_fixture, Harness, HarnessConfig, HarnessError, Include, NativeIncludes, Outcome,
};

fn source_with_includes(includes: &str) -> String {
    format!(
        "/*---\nes5id: 1.1\ndescription: x\nincludes: [{}]\n---*/\nfunction testcase() {{}}\nrunTestCase(testcase);\n",
        includes
    )
}

#[test]
fn test_prepare_resolves_case_runner() {
    let fixture = load_fixture("x.js", &source_with_includes("runTestCase.js"), || {
        Ok(JsValue::boolean(true))
    })
    .unwrap();
    let includes = Harness::new().prepare(&fixture).unwrap();
    assert_eq!(includes, vec![Include::CaseRunner]);
}

#[test]
fn test_unresolved_include_is_an_error() {
    let fixture = load_fixture(
        "x.js",
        &source_with_includes("runTestCase.js, propertyHelper.js"),
        || Ok(JsValue::boolean(true)),
    )
    .unwrap();
    let err = Harness::new().run_fixture(&fixture).unwrap_err();
    assert_eq!(
        err,
        HarnessError::UnresolvedInclude {
            fixture: "1.1".to_string(),
            include: "propertyHelper.js".to_string(),
        }
    );
}

#[test]
fn test_lenient_harness_skips_unresolved_include() {
    let fixture = load_fixture("x.js", &source_with_includes("propertyHelper.js"), || {
        Ok(JsValue::boolean(true))
    })
    .unwrap();
    let mut harness = Harness::new();
    harness.set_strict_includes(false);
    assert!(harness.prepare(&fixture).unwrap().is_empty());
    assert_eq!(harness.run_fixture(&fixture).unwrap(), Outcome::Pass);
}

#[test]
fn test_extra_includes_from_config() {
    let fixture = load_fixture("x.js", &source_with_includes("propertyHelper.js"), || {
        Ok(JsValue::boolean(true))
    })
    .unwrap();
    let config = HarnessConfig::from_yaml("extra_includes: [propertyHelper.js]").unwrap();
    let harness = Harness::new().with_config(config);
    assert_eq!(
        harness.prepare(&fixture).unwrap(),
        vec![Include::Host("propertyHelper.js".to_string())]
    );
}

#[test]
fn test_registered_host_include() {
    let fixture = load_fixture("x.js", &source_with_includes("compareArray.js"), || {
        Ok(JsValue::boolean(true))
    })
    .unwrap();
    let harness = Harness::with_resolver(NativeIncludes::new().with_include("compareArray.js"));
    assert!(harness.run_fixture(&fixture).unwrap().is_pass());
}

#[test]
fn test_closure_resolver() {
    let fixture = load_fixture("x.js", &source_with_includes("anything.js"), || {
        Ok(JsValue::boolean(true))
    })
    .unwrap();
    let harness = Harness::with_resolver(|name: &str| Some(Include::Host(name.to_string())));
    assert_eq!(harness.prepare(&fixture).unwrap().len(), 1);
}

#[test]
fn test_thrown_error_is_an_outcome_not_an_error() {
    let fixture = load_fixture("x.js", &source_with_includes("runTestCase.js"), || {
        Err(JsError::range_error("Invalid array length"))
    })
    .unwrap();
    let outcome = Harness::new().run_fixture(&fixture).unwrap();
    assert_eq!(
        outcome,
        Outcome::Fail("test case threw: RangeError: Invalid array length".to_string())
    );
}

#[test]
fn test_malformed_fixture() {
    let err = load_fixture("bad.js", "function testcase() {}", || Ok(JsValue::Null)).unwrap_err();
    assert!(matches!(err, HarnessError::MalformedFixture { ref path, .. } if path == "bad.js"));
}
