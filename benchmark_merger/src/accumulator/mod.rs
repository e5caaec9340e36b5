//!
//! Measurements grouped by test suite and test, collected across reports.
//!

pub mod suite;

mod tests;

use std::collections::BTreeMap;

use crate::input::record::Record;
use crate::strategy::key::Key;
use crate::warning::Warning;

use self::perf_test::PerfTest;
use self::suite::Suite;

///
/// Measurements grouped by test suite and test, collected across reports.
///
/// Suites and tests are kept in the order they were first seen, and samples
/// in the order they were pushed.
///
#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    /// The suites.
    suites: Vec<Suite>,
    /// Positions of the suites in `suites`, by name.
    index: BTreeMap<String, usize>,
}

impl Accumulator {
    ///
    /// Adds the samples of `record` to the test identified by `key`.
    ///
    /// The unit of the first record of a test is kept. A record in a different unit is
    /// still added, and reported with a warning.
    ///
    pub fn push(&mut self, key: Key, record: &Record) -> Option<Warning> {
        let Key {
            suite: suite_name,
            test: test_name,
        } = key;

        let position = match self.index.get(suite_name.as_str()) {
            Some(position) => *position,
            None => {
                self.index.insert(suite_name.clone(), self.suites.len());
                self.suites.push(Suite::new(suite_name.clone()));
                self.suites.len() - 1
            }
        };
        let suite = &mut self.suites[position];

        match suite.get_mut(test_name.as_str()) {
            Some(test) => {
                test.push(record);
                if test.unit != record.time_unit {
                    return Some(Warning::UnitMismatch {
                        suite: suite_name,
                        test: test_name,
                        expected: test.unit.clone(),
                        found: record.time_unit.clone(),
                    });
                }
            }
            None => suite.insert(PerfTest::new(test_name, record)),
        }
        None
    }

    ///
    /// Returns the suites in the order they were first seen.
    ///
    pub fn suites(&self) -> &[Suite] {
        self.suites.as_slice()
    }
}

impl IntoIterator for Accumulator {
    type Item = Suite;
    type IntoIter = std::vec::IntoIter<Suite>;

    fn into_iter(self) -> Self::IntoIter {
        self.suites.into_iter()
    }
}
