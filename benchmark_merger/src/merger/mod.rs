//!
//! Merges benchmark harness reports into per-test sample series.
//!

pub mod error;


use std::path::Path;

use crate::accumulator::Accumulator;
use crate::context::ConfigContext;
use crate::input::Input;
use crate::output::Output;
use crate::strategy::Strategy;
use crate::warning::Warning;

use self::error::Error;

///
/// Merges benchmark harness reports into per-test sample series.
///
/// Reports must be fed in the order their samples should appear in the series.
///
#[derive(Debug, Default)]
pub struct Merger {
    /// The grouping strategy, fixed for the whole merge.
    strategy: Strategy,
    /// The configuration context of the last merged report.
    baseline: Option<ConfigContext>,
    /// The samples merged so far.
    accumulator: Accumulator,
}

impl Merger {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            baseline: None,
            accumulator: Accumulator::default(),
        }
    }

    ///
    /// Merges the raw measurements of a report read from `path`.
    ///
    /// Returns the warnings raised by this report. They never interrupt the merge.
    ///
    /// # Errors
    ///
    /// If the report has no executable path, and the strategy names suites after it.
    ///
    pub fn extend(&mut self, path: &Path, input: Input) -> Result<Vec<Warning>, Error> {
        let mut warnings = Vec::new();

        let (context, warning) = crate::context::validate(self.baseline.as_ref(), &input, path);
        warnings.extend(warning);
        self.baseline = Some(context);

        for record in input.iterations() {
            let key = self.strategy.key(&input.context, record).ok_or_else(|| {
                Error::MissingExecutable {
                    path: path.to_path_buf(),
                    strategy: self.strategy,
                }
            })?;
            warnings.extend(self.accumulator.push(key, record));
        }
        Ok(warnings)
    }

    ///
    /// Assembles the merged samples into the output.
    ///
    pub fn finalize(self) -> Output {
        Output::from(self.accumulator)
    }
}

///
/// Reads and merges the reports at `paths`, in order.
///
/// Stops at the first report that cannot be read, parsed, or grouped.
///
pub fn merge<P>(
    paths: impl IntoIterator<Item = P>,
    strategy: Strategy,
) -> Result<(Output, Vec<Warning>), Error>
where
    P: AsRef<Path>,
{
    let mut merger = Merger::new(strategy);
    let mut warnings = Vec::new();
    for path in paths.into_iter() {
        let path = path.as_ref();
        let input = Input::try_from(path)?;
        warnings.extend(merger.extend(path, input)?);
    }
    Ok((merger.finalize(), warnings))
}
