//! Unit tests for fixture parsing

use conformance_harness::{FixtureError, FixtureMetadata, FixtureSource};

const HEADER: &str = "// Copyright (c) 2012 Ecma International.  All rights reserved.\n// Use Terms apply.\n\n";

fn fixture(metadata: &str, body: &str) -> String {
    format!("{}/*---\n{}\n---*/\n\n{}", HEADER, metadata, body)
}

const BODY: &str = "function testcase() {\n    return true;\n}\nrunTestCase(testcase);\n";

#[test]
fn test_parse_folded_description() {
    let source = fixture(
        "es5id: 15.2.3.12-2-c-1\ndescription: >\n    Object.isFrozen returns false\n    for configurable properties\nincludes: [runTestCase.js]",
        BODY,
    );
    let parsed = FixtureSource::parse("15.2.3.12-2-c-1.js", &source).unwrap();
    assert_eq!(
        parsed.metadata.description.trim(),
        "Object.isFrozen returns false for configurable properties"
    );
    assert_eq!(parsed.id(), "15.2.3.12-2-c-1");
}

#[test]
fn test_license_is_kept_verbatim() {
    let source = fixture("description: x", BODY);
    let parsed = FixtureSource::parse("x.js", &source).unwrap();
    assert_eq!(
        parsed.license,
        "// Copyright (c) 2012 Ecma International.  All rights reserved.\n// Use Terms apply."
    );
}

#[test]
fn test_missing_license_is_empty() {
    let source = format!("/*---\ndescription: x\n---*/\n{}", BODY);
    let parsed = FixtureSource::parse("x.js", &source).unwrap();
    assert!(parsed.license.is_empty());
}

#[test]
fn test_missing_metadata() {
    let source = format!("{}{}", HEADER, BODY);
    assert_eq!(
        FixtureSource::parse("x.js", &source).unwrap_err(),
        FixtureError::MissingMetadata
    );
}

#[test]
fn test_invalid_metadata_has_position() {
    let source = fixture("description: x\nincludes: {", BODY);
    match FixtureSource::parse("x.js", &source).unwrap_err() {
        FixtureError::InvalidMetadata { position, .. } => {
            // The header takes three lines and the block opener one more.
            assert!(position.line >= 5, "position {} is before the block", position);
        }
        other => panic!("expected InvalidMetadata, got {:?}", other),
    }
}

#[test]
fn test_wrong_field_type_is_invalid() {
    let source = fixture("includes: 3", BODY);
    assert!(matches!(
        FixtureSource::parse("x.js", &source),
        Err(FixtureError::InvalidMetadata { .. })
    ));
}

#[test]
fn test_unknown_fields_are_ignored() {
    let source = fixture("description: x\nlocale: [en]", BODY);
    assert!(FixtureSource::parse("x.js", &source).is_ok());
}

#[test]
fn test_missing_testcase() {
    let source = fixture("description: x", "runTestCase(testcase);\n");
    assert_eq!(
        FixtureSource::parse("x.js", &source).unwrap_err(),
        FixtureError::MissingTestCase
    );
}

#[test]
fn test_missing_runner_call() {
    let source = fixture("description: x", "function testcase() { return true; }\n");
    assert_eq!(
        FixtureSource::parse("x.js", &source).unwrap_err(),
        FixtureError::MissingRunnerCall
    );
}

#[test]
fn test_testcase_inside_metadata_does_not_count() {
    let source = fixture(
        "description: mentions function testcase() and runTestCase(testcase)",
        "1;\n",
    );
    assert_eq!(
        FixtureSource::parse("x.js", &source).unwrap_err(),
        FixtureError::MissingTestCase
    );
}

#[test]
fn test_negative_expectation() {
    let source = fixture("description: x\nnegative:\n  phase: runtime\n  type: TypeError", BODY);
    let metadata = FixtureMetadata::parse(&source).unwrap();
    assert!(metadata.is_negative());
    assert_eq!(metadata.negative.unwrap().error_type, "TypeError");
}

#[test]
fn test_flags() {
    let source = fixture("description: x\nflags: [onlyStrict]", BODY);
    let metadata = FixtureMetadata::parse(&source).unwrap();
    assert!(metadata.is_strict_only());
    assert!(!metadata.declares_include("runTestCase.js"));
}
