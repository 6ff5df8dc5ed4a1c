//! Include resolution
//!
//! Fixtures declare helper files in their metadata. Here those names map to
//! native capabilities instead of script sources.

use std::collections::BTreeSet;

/// Include providing the Case Runner
pub const RUN_TEST_CASE: &str = "runTestCase.js";

/// A resolved include
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Include {
    /// `runTestCase.js`, provided by [`run_test_case`](crate::run_test_case)
    CaseRunner,
    /// A helper the host registered as present
    Host(String),
}

impl Include {
    /// Name the include was declared with
    pub fn name(&self) -> &str {
        match self {
            Include::CaseRunner => RUN_TEST_CASE,
            Include::Host(name) => name,
        }
    }
}

/// Maps declared include names to what provides them
pub trait IncludeResolver {
    /// Resolve `name`, or `None` if nothing provides it
    fn resolve(&self, name: &str) -> Option<Include>;
}

impl<F> IncludeResolver for F
where
    F: Fn(&str) -> Option<Include>,
{
    fn resolve(&self, name: &str) -> Option<Include> {
        self(name)
    }
}

/// Default resolver: the Case Runner plus host-registered names
#[derive(Debug, Clone, Default)]
pub struct NativeIncludes {
    host: BTreeSet<String>,
}

impl NativeIncludes {
    /// Resolver knowing only `runTestCase.js`
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` as provided by the host
    pub fn with_include(mut self, name: impl Into<String>) -> Self {
        self.host.insert(name.into());
        self
    }

    /// Names registered with [`with_include`](Self::with_include)
    pub fn host_includes(&self) -> impl Iterator<Item = &str> {
        self.host.iter().map(String::as_str)
    }
}

impl IncludeResolver for NativeIncludes {
    fn resolve(&self, name: &str) -> Option<Include> {
        if name == RUN_TEST_CASE {
            Some(Include::CaseRunner)
        } else if self.host.contains(name) {
            Some(Include::Host(name.to_string()))
        } else {
            None
        }
    }
}
