//!
//! Benchmark harness report, one per harness invocation.
//!

pub mod context;
pub mod error;
pub mod record;


use std::path::Path;

use self::context::Context;
use self::error::Error as InputError;
use self::record::Entry;
use self::record::Record;

///
/// Benchmark harness report, one per harness invocation.
///
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Input {
    /// The environment the benchmarks were run in.
    pub context: Context,
    /// The benchmark records, in the order the harness emitted them.
    pub benchmarks: Vec<Entry>,
}

impl Input {
    ///
    /// Returns the raw measurement records, skipping the summaries computed by the harness.
    ///
    pub fn iterations(&self) -> impl Iterator<Item = &Record> {
        self.benchmarks.iter().filter_map(Entry::as_iteration)
    }
}

impl TryFrom<&Path> for Input {
    type Error = InputError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| InputError::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        if text.trim().is_empty() {
            return Err(InputError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        let json: Self =
            serde_json::from_str(text.as_str()).map_err(|error| InputError::Parsing {
                error,
                path: path.to_path_buf(),
            })?;
        Ok(json)
    }
}
