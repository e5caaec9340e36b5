//!
//! Tests of a suite, in the order they were first seen.
//!

use std::collections::BTreeMap;

use super::perf_test::PerfTest;

///
/// Tests of a suite, in the order they were first seen.
///
#[derive(Debug, Clone, Default)]
pub struct Suite {
    /// The suite name.
    pub name: String,
    /// The tests.
    pub tests: Vec<PerfTest>,
    /// Positions of the tests in `tests`, by name.
    index: BTreeMap<String, usize>,
}

impl Suite {
    ///
    /// Creates an empty suite.
    ///
    pub fn new(name: String) -> Self {
        Self {
            name,
            tests: Vec::new(),
            index: BTreeMap::new(),
        }
    }

    ///
    /// Returns the test with the given name, if it exists.
    ///
    pub fn get_mut(&mut self, name: &str) -> Option<&mut PerfTest> {
        let position = *self.index.get(name)?;
        Some(&mut self.tests[position])
    }

    ///
    /// Appends a new test. The caller makes sure no test with the same name exists.
    ///
    pub fn insert(&mut self, test: PerfTest) {
        self.index.insert(test.name.clone(), self.tests.len());
        self.tests.push(test);
    }
}
