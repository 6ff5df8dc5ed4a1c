//! Harness: include resolution around the Case Runner

use crate::error::HarnessError;
use crate::fixture::{Fixture, FixtureSource};
use crate::includes::{Include, IncludeResolver, NativeIncludes};
use crate::runner::{run_test_case, Outcome};
use builtins::{JsResult, JsValue};
use serde::{Deserialize, Serialize};

/// Harness settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Unresolved includes are errors; when false they are logged and skipped
    pub strict_includes: bool,
    /// Include names treated as present in addition to the resolver's
    pub extra_includes: Vec<String>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            strict_includes: true,
            extra_includes: Vec::new(),
        }
    }
}

impl HarnessConfig {
    /// Load settings from a YAML document; missing keys keep their defaults
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }
}

/// Parse a fixture source and bind its test case
pub fn load_fixture<F>(path: &str, source: &str, testcase: F) -> Result<Fixture, HarnessError>
where
    F: Fn() -> JsResult<JsValue> + 'static,
{
    FixtureSource::parse(path, source)
        .map(|parsed| parsed.bind(testcase))
        .map_err(|source| HarnessError::MalformedFixture {
            path: path.to_string(),
            source,
        })
}

/// Runs fixtures one at a time through the Case Runner
pub struct Harness {
    resolver: Box<dyn IncludeResolver>,
    config: HarnessConfig,
}

impl Harness {
    /// Create a harness resolving includes with [`NativeIncludes`]
    pub fn new() -> Self {
        Self::with_resolver(NativeIncludes::new())
    }

    /// Create a harness with a custom include resolver
    pub fn with_resolver(resolver: impl IncludeResolver + 'static) -> Self {
        Self {
            resolver: Box::new(resolver),
            config: HarnessConfig::default(),
        }
    }

    /// Replace the settings
    pub fn with_config(mut self, config: HarnessConfig) -> Self {
        self.config = config;
        self
    }

    /// Current settings
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Toggle strict include resolution
    pub fn set_strict_includes(&mut self, strict: bool) {
        self.config.strict_includes = strict;
    }

    fn resolve(&self, name: &str) -> Option<Include> {
        self.resolver.resolve(name).or_else(|| {
            self.config
                .extra_includes
                .iter()
                .any(|extra| extra == name)
                .then(|| Include::Host(name.to_string()))
        })
    }

    /// Resolve every include the fixture declares
    pub fn prepare(&self, fixture: &Fixture) -> Result<Vec<Include>, HarnessError> {
        let mut resolved = Vec::with_capacity(fixture.metadata().includes.len());
        for name in &fixture.metadata().includes {
            match self.resolve(name) {
                Some(include) => {
                    tracing::debug!(include = %name, "resolved include");
                    resolved.push(include);
                }
                None if self.config.strict_includes => {
                    return Err(HarnessError::UnresolvedInclude {
                        fixture: fixture.id().to_string(),
                        include: name.clone(),
                    });
                }
                None => tracing::warn!(include = %name, "skipping unresolved include"),
            }
        }
        Ok(resolved)
    }

    /// Resolve includes, then run the fixture's test case.
    ///
    /// `Err` means the fixture could not be run; a failing or throwing test
    /// case is `Ok(Outcome::Fail(_))`.
    #[tracing::instrument(skip_all, fields(fixture = %fixture.id()))]
    pub fn run_fixture(&self, fixture: &Fixture) -> Result<Outcome, HarnessError> {
        self.prepare(fixture)?;
        Ok(run_test_case(|| fixture.call()))
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}
