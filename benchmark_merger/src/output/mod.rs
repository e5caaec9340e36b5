//!
//! Merged benchmark output, consumed by the regression detection engine.
//!

pub mod data_point;
pub mod policy;
pub mod test_suite;

mod tests;

use std::path::Path;

use crate::accumulator::Accumulator;

use self::test_suite::TestSuite;

///
/// Merged benchmark output, consumed by the regression detection engine.
///
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    /// The test suites, in the order they were first seen.
    pub test_suites: Vec<TestSuite>,
}

impl Output {
    ///
    /// Serializes the output to pretty-printed JSON.
    ///
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|error| anyhow::anyhow!("Benchmark output serializing: {error}"))
    }

    ///
    /// Writes the output to a JSON file.
    ///
    pub fn write_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = self.to_json()?;
        std::fs::write(path, content)
            .map_err(|error| anyhow::anyhow!("Benchmark file {path:?} writing: {error}"))?;
        Ok(())
    }
}

impl From<Accumulator> for Output {
    fn from(accumulator: Accumulator) -> Self {
        Self {
            test_suites: accumulator.into_iter().map(TestSuite::from).collect(),
        }
    }
}
