//!
//! Report merging error.
//!

use std::path::PathBuf;

use crate::input::error::Error as InputError;
use crate::strategy::Strategy;

///
/// Report merging error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The report cannot be read.
    #[error(transparent)]
    Input(#[from] InputError),
    /// The report context has no executable path, but the strategy names suites after it.
    #[error("Input file {path:?} has no `context.executable`, which the `{strategy}` strategy requires")]
    MissingExecutable {
        /// The path to the input file.
        path: PathBuf,
        /// The grouping strategy.
        strategy: Strategy,
    },
}
