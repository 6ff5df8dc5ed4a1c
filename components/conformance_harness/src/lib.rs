//! Conformance Case Runner
//!
//! Runs test262-style fixtures against the [`builtins`] evaluation
//! environment. A fixture is a source file with YAML metadata and a
//! `testcase` function; here the function body is a native Rust closure
//! bound to the parsed source.
//!
//! # Example
//!
//! ```
//! use conformance_harness::{fixtures, Harness, Outcome};
//!
//! let harness = Harness::new();
//! for fixture in fixtures::all().unwrap() {
//!     assert_eq!(harness.run_fixture(&fixture).unwrap(), Outcome::Pass);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod fixture;
pub mod fixtures;
pub mod harness;
pub mod includes;
pub mod runner;

pub use error::{FixtureError, HarnessError};
pub use fixture::{Fixture, FixtureMetadata, FixtureSource, NegativeExpectation, TestCase};
pub use harness::{load_fixture, Harness, HarnessConfig};
pub use includes::{Include, IncludeResolver, NativeIncludes, RUN_TEST_CASE};
pub use runner::{run_predicate, run_test_case, Outcome, Truthiness, RETURNED_FALSE};
