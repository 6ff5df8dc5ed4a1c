//! Structural errors
//!
//! These are distinct from a failing [`Outcome`](crate::Outcome): they mean
//! a fixture could not be run at all.

use core_types::SourcePosition;

/// A fixture source that does not follow the fixture format
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FixtureError {
    /// No `/*--- ... ---*/` block
    #[error("no metadata block found")]
    MissingMetadata,

    /// The metadata block is not valid YAML for the metadata schema
    #[error("invalid metadata at {position}: {message}")]
    InvalidMetadata {
        /// Where in the fixture source the problem was detected
        position: SourcePosition,
        /// Parser message
        message: String,
    },

    /// The body never defines `function testcase(...)`
    #[error("fixture does not define a testcase function")]
    MissingTestCase,

    /// `testcase` is defined but never handed to `runTestCase`
    #[error("fixture never passes testcase to runTestCase")]
    MissingRunnerCall,
}

/// Errors that prevent the harness from running a fixture
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HarnessError {
    /// The fixture source is malformed
    #[error("malformed fixture {path}: {source}")]
    MalformedFixture {
        /// Path of the fixture
        path: String,
        /// What is wrong with it
        #[source]
        source: FixtureError,
    },

    /// A declared include could not be resolved
    #[error("fixture {fixture} includes {include}, which cannot be resolved")]
    UnresolvedInclude {
        /// Identifier of the fixture
        fixture: String,
        /// Include name as declared
        include: String,
    },
}
