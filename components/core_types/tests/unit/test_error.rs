//! Unit tests for JsError and ErrorKind

use core_types::{ErrorKind, JsError};

#[test]
fn test_constructors_set_kind() {
    assert_eq!(JsError::type_error("x").kind, ErrorKind::TypeError);
    assert_eq!(JsError::range_error("x").kind, ErrorKind::RangeError);
}

#[test]
fn test_display_uses_constructor_name() {
    let error = JsError::new(ErrorKind::Error, "boom");
    assert_eq!(error.to_string(), "Error: boom");

    let error = JsError::new(ErrorKind::ReferenceError, "foo is not defined");
    assert_eq!(error.to_string(), "ReferenceError: foo is not defined");
}

#[test]
fn test_error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    takes_error(&JsError::type_error("x"));
}

#[test]
fn test_error_equality() {
    assert_eq!(JsError::type_error("a"), JsError::type_error("a"));
    assert_ne!(JsError::type_error("a"), JsError::range_error("a"));
}
