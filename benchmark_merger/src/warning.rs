//!
//! Non-fatal problems found while merging.
//!

use std::path::PathBuf;

///
/// Non-fatal problems found while merging.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// The file was produced in a different environment than the previous one.
    ContextDrift {
        /// The file whose context differs.
        path: PathBuf,
    },
    /// A record reports its times in a unit other than the one first seen for the test.
    UnitMismatch {
        /// The test suite name.
        suite: String,
        /// The test name.
        test: String,
        /// The unit of the first record of the test.
        expected: String,
        /// The unit of the offending record.
        found: String,
    },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ContextDrift { path } => write!(
                f,
                "Context in file {path:?} is different from the previous one. \
                 Consider uploading each distinct context under its own configuration identifier."
            ),
            Self::UnitMismatch {
                suite,
                test,
                expected,
                found,
            } => write!(
                f,
                "Test `{suite}::{test}` has samples in `{found}`, but the series unit is `{expected}`. \
                 The samples are merged without conversion."
            ),
        }
    }
}
