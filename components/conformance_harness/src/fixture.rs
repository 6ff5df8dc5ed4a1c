//! Fixture sources and their metadata
//!
//! A fixture source is a license comment, a YAML metadata block between
//! `/*---` and `---*/`, a `testcase` function and a call handing that
//! function to `runTestCase`. [`FixtureSource::parse`] checks that shape and
//! deserializes the metadata; [`FixtureSource::bind`] attaches the native
//! test case that implements the body.

use crate::error::FixtureError;
use builtins::{JsResult, JsValue};
use core_types::SourcePosition;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

static METADATA_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*---\r?\n(.*?)\r?\n?---\*/").expect("valid regex"));

static TESTCASE_DEFINITION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bfunction\s+testcase\s*\(").expect("valid regex"));

static RUNNER_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\brunTestCase\s*\(\s*testcase\s*\)").expect("valid regex"));

/// Expected error for negative fixtures
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NegativeExpectation {
    /// Phase where the error is expected: "parse", "resolution" or "runtime"
    pub phase: String,
    /// Constructor name of the expected error (e.g. "TypeError")
    #[serde(rename = "type")]
    pub error_type: String,
}

/// Metadata parsed from the YAML block
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FixtureMetadata {
    /// What the fixture verifies
    pub description: String,
    /// Longer explanation
    pub info: Option<String>,
    /// Expected error for negative fixtures
    pub negative: Option<NegativeExpectation>,
    /// Helper files that must be available before the fixture runs
    pub includes: Vec<String>,
    /// Execution flags (e.g. "onlyStrict", "noStrict")
    pub flags: HashSet<String>,
    /// Language features required by the fixture
    pub features: Vec<String>,
    /// ES5.1 section identifier
    pub es5id: Option<String>,
    /// ES6 section identifier
    pub es6id: Option<String>,
    /// ES section identifier
    pub esid: Option<String>,
    /// Author of the fixture
    pub author: Option<String>,
}

impl FixtureMetadata {
    /// Parse only the metadata block of `source`
    pub fn parse(source: &str) -> Result<Self, FixtureError> {
        let block = METADATA_BLOCK
            .captures(source)
            .and_then(|c| c.get(1))
            .ok_or(FixtureError::MissingMetadata)?;

        serde_yaml::from_str(block.as_str()).map_err(|e| {
            let offset = block.start() + e.location().map(|l| l.index()).unwrap_or(0);
            FixtureError::InvalidMetadata {
                position: SourcePosition::from_offset(source, offset),
                message: e.to_string(),
            }
        })
    }

    /// Most specific section identifier declared
    pub fn section_id(&self) -> Option<&str> {
        self.esid
            .as_deref()
            .or(self.es6id.as_deref())
            .or(self.es5id.as_deref())
    }

    /// Check if the fixture declares `name` as an include
    pub fn declares_include(&self, name: &str) -> bool {
        self.includes.iter().any(|i| i == name)
    }

    /// Check if the fixture expects an error instead of a result
    pub fn is_negative(&self) -> bool {
        self.negative.is_some()
    }

    /// Check if the fixture must only run in strict mode
    pub fn is_strict_only(&self) -> bool {
        self.flags.contains("onlyStrict")
    }
}

/// A parsed fixture source, not yet bound to a test case
#[derive(Debug, Clone)]
pub struct FixtureSource {
    /// Path the source was read from
    pub path: String,
    /// Leading `//` comment lines, verbatim
    pub license: String,
    /// Parsed metadata
    pub metadata: FixtureMetadata,
    /// Source following the metadata block
    pub body: String,
}

impl FixtureSource {
    /// Check the fixture format and parse the metadata
    pub fn parse(path: impl Into<String>, source: &str) -> Result<Self, FixtureError> {
        let metadata = FixtureMetadata::parse(source)?;

        let block_end = METADATA_BLOCK
            .find(source)
            .map(|m| m.end())
            .ok_or(FixtureError::MissingMetadata)?;
        let body = &source[block_end..];

        if !TESTCASE_DEFINITION.is_match(body) {
            return Err(FixtureError::MissingTestCase);
        }
        if !RUNNER_CALL.is_match(body) {
            return Err(FixtureError::MissingRunnerCall);
        }

        let license = source
            .lines()
            .take_while(|line| line.trim_start().starts_with("//"))
            .collect::<Vec<_>>()
            .join("\n");

        Ok(Self {
            path: path.into(),
            license,
            metadata,
            body: body.trim().to_string(),
        })
    }

    /// File name without extension
    pub fn name(&self) -> &str {
        Path::new(&self.path)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.path)
    }

    /// Section identifier, falling back to the file name
    pub fn id(&self) -> &str {
        self.metadata.section_id().unwrap_or_else(|| self.name())
    }

    /// Attach the test case implementing the body
    pub fn bind<F>(self, testcase: F) -> Fixture
    where
        F: Fn() -> JsResult<JsValue> + 'static,
    {
        Fixture {
            source: self,
            testcase: Box::new(testcase),
        }
    }
}

/// Zero-argument test case; truthy completion passes
pub type TestCase = Box<dyn Fn() -> JsResult<JsValue>>;

/// A fixture ready to run: parsed source plus its test case
pub struct Fixture {
    source: FixtureSource,
    testcase: TestCase,
}

impl Fixture {
    /// The parsed source
    pub fn source(&self) -> &FixtureSource {
        &self.source
    }

    /// Parsed metadata
    pub fn metadata(&self) -> &FixtureMetadata {
        &self.source.metadata
    }

    /// Identifier used in logs and errors
    pub fn id(&self) -> &str {
        self.source.id()
    }

    /// What the fixture verifies
    pub fn description(&self) -> &str {
        self.source.metadata.description.trim()
    }

    /// Invoke the test case directly, without the Case Runner
    pub fn call(&self) -> JsResult<JsValue> {
        (self.testcase)()
    }
}

impl fmt::Debug for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fixture")
            .field("id", &self.id())
            .field("path", &self.source.path)
            .field("includes", &self.source.metadata.includes)
            .finish_non_exhaustive()
    }
}
