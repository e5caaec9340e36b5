//!
//! The identity of a merged test.
//!

///
/// The identity of a merged test.
///
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key {
    /// The test suite name.
    pub suite: String,
    /// The test name within the suite.
    pub test: String,
}

impl Key {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(suite: impl Into<String>, test: impl Into<String>) -> Self {
        Self {
            suite: suite.into(),
            test: test.into(),
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}::{}", self.suite, self.test)
    }
}
