//!
//! Strategy of grouping benchmark records into test suites and tests.
//!

pub mod key;


use std::path::Path;

use crate::input::context::Context;
use crate::input::record::Record;

use self::key::Key;

/// The separator of the hierarchical run name segments.
pub const RUN_NAME_SEPARATOR: char = '/';

///
/// Strategy of grouping benchmark records into test suites and tests.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// A suite per benchmark executable, a test per run name.
    /// Suits reports where each file is a full run of a single benchmark binary.
    #[default]
    ByExecutable,
    /// A suite per first run name segment, a test per the rest of the run name.
    /// Suits run names of the form `<suite>/<test>/<variant>`.
    ByTestFunction,
}

impl Strategy {
    ///
    /// Returns the suite and test a record belongs to.
    ///
    /// Returns `None` if the strategy needs the executable path and the context has none.
    ///
    pub fn key(&self, context: &Context, record: &Record) -> Option<Key> {
        match self {
            Self::ByExecutable => {
                let executable = context.executable.as_deref()?;
                Some(Key::new(base_name(executable), record.run_name.as_str()))
            }
            Self::ByTestFunction => Some(match record.run_name.split_once(RUN_NAME_SEPARATOR) {
                Some((suite, test)) => Key::new(base_name(suite), test),
                None => Key::new(
                    base_name(record.run_name.as_str()),
                    record.run_name.as_str(),
                ),
            }),
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "by-executable" => Ok(Self::ByExecutable),
            "by-test-function" => Ok(Self::ByTestFunction),
            string => anyhow::bail!(
                "Unknown grouping strategy `{string}`. Supported strategies: {}",
                vec![Self::ByExecutable, Self::ByTestFunction]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ByExecutable => write!(f, "by-executable"),
            Self::ByTestFunction => write!(f, "by-test-function"),
        }
    }
}

///
/// Returns the last component of `path`, or `path` itself if it has none, like `..`.
///
fn base_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_owned())
}
