//! The Case Runner
//!
//! Invokes a test case exactly once and turns its completion into an
//! [`Outcome`]. Errors returned by the test case and panics raised inside
//! it are caught and reported as failures; nothing escapes to the caller.

use builtins::JsValue;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// Failure reason for a test case that completed with a falsy value
pub const RETURNED_FALSE: &str = "test case returned false";

/// Result of running a single test case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Test case returned a truthy value
    Pass,
    /// Test case returned a falsy value or threw
    Fail(String),
}

impl Outcome {
    /// Failure for a test case that threw `error`
    pub fn threw(error: impl fmt::Display) -> Self {
        Outcome::Fail(format!("test case threw: {}", error))
    }

    /// Check if the outcome is a pass
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }

    /// Check if the outcome is a failure
    pub fn is_fail(&self) -> bool {
        matches!(self, Outcome::Fail(_))
    }

    /// Failure reason, if any
    pub fn reason(&self) -> Option<&str> {
        match self {
            Outcome::Pass => None,
            Outcome::Fail(reason) => Some(reason),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Pass => f.write_str("PASS"),
            Outcome::Fail(reason) => write!(f, "FAIL: {}", reason),
        }
    }
}

/// Values a test case may complete with, judged by JavaScript truthiness
pub trait Truthiness {
    /// ToBoolean of the value
    fn is_truthy(&self) -> bool;
}

impl Truthiness for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthiness for JsValue {
    fn is_truthy(&self) -> bool {
        self.to_boolean()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Run a fallible test case.
///
/// - `Ok` with a truthy value is a pass
/// - `Ok` with a falsy value fails with [`RETURNED_FALSE`]
/// - `Err(e)` or a panic fails with `test case threw: <message>`
///
/// # Examples
///
/// ```
/// use conformance_harness::{run_test_case, Outcome};
///
/// let outcome = run_test_case(|| Ok::<_, String>(1 + 1 == 2));
/// assert_eq!(outcome, Outcome::Pass);
///
/// let outcome = run_test_case(|| Err::<bool, _>("boom"));
/// assert_eq!(outcome, Outcome::Fail("test case threw: boom".to_string()));
/// ```
pub fn run_test_case<F, T, E>(testcase: F) -> Outcome
where
    F: FnOnce() -> Result<T, E>,
    T: Truthiness,
    E: fmt::Display,
{
    tracing::debug!("running test case");

    let outcome = match panic::catch_unwind(AssertUnwindSafe(testcase)) {
        Ok(Ok(value)) if value.is_truthy() => Outcome::Pass,
        Ok(Ok(_)) => Outcome::Fail(RETURNED_FALSE.to_string()),
        Ok(Err(error)) => Outcome::threw(error),
        Err(payload) => Outcome::threw(panic_message(payload.as_ref())),
    };

    match &outcome {
        Outcome::Pass => tracing::debug!("test case passed"),
        Outcome::Fail(reason) => tracing::warn!(%reason, "test case failed"),
    }
    outcome
}

/// Run an infallible predicate; it can still fail by panicking
pub fn run_predicate<F, T>(testcase: F) -> Outcome
where
    F: FnOnce() -> T,
    T: Truthiness,
{
    run_test_case(|| Ok::<T, std::convert::Infallible>(testcase()))
}
