//!
//! A test suite.
//!

use crate::accumulator::suite::Suite;
use crate::output::test::Test;

///
/// A test suite.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSuite {
    /// The suite name.
    pub name: String,
    /// The tests, in the order they were first seen.
    pub tests: Vec<Test>,
}

impl From<Suite> for TestSuite {
    fn from(suite: Suite) -> Self {
        Self {
            name: suite.name,
            tests: suite.tests.into_iter().map(Test::from).collect(),
        }
    }
}
