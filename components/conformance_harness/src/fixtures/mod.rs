//! Bundled fixtures
//!
//! Each fixture pairs its original source, embedded at compile time, with a
//! native test case doing what the source's `testcase` function does. Test
//! cases build a fresh [`Realm`](builtins::Realm) on every call.

mod index_of;
mod is_frozen;

use crate::error::HarnessError;
use crate::fixture::Fixture;

pub use index_of::array_index_of_sees_added_properties;
pub use is_frozen::object_is_frozen_with_configurable_property;

/// Every bundled fixture
pub fn all() -> Result<Vec<Fixture>, HarnessError> {
    Ok(vec![
        array_index_of_sees_added_properties()?,
        object_is_frozen_with_configurable_property()?,
    ])
}
