//!
//! A single benchmark record.
//!

///
/// A benchmark record of any kind, discriminated by its `run_type`.
///
/// Only raw measurements are decoded. Statistics computed by the harness, including
/// complexity fits like `BigO` and `RMS` which carry no timings, are skipped whatever
/// their shape.
///
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(tag = "run_type", rename_all = "lowercase")]
pub enum Entry {
    /// A raw measurement.
    Iteration(Record),
    /// A statistic over repetitions, for example mean, standard deviation or `BigO`.
    Aggregate,
    /// Any record kind the harness may add in the future.
    #[serde(other)]
    Other,
}

impl Entry {
    ///
    /// Returns the record if it is a raw measurement.
    ///
    pub fn as_iteration(&self) -> Option<&Record> {
        match self {
            Self::Iteration(record) => Some(record),
            Self::Aggregate | Self::Other => None,
        }
    }
}

///
/// A raw measurement.
///
/// The repetition index is deliberately not read: reports of separate invocations
/// all start counting repetitions from zero.
///
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Record {
    /// The benchmark name, possibly hierarchical, for example `Fixture/Case/8`.
    pub run_name: String,
    /// The wall clock time.
    pub real_time: f64,
    /// The CPU time.
    pub cpu_time: f64,
    /// The unit both times are expressed in.
    #[serde(default = "Record::default_time_unit")]
    pub time_unit: String,
}

impl Record {
    /// The unit the harness uses when none is specified.
    pub const DEFAULT_TIME_UNIT: &'static str = "ns";

    fn default_time_unit() -> String {
        Self::DEFAULT_TIME_UNIT.to_owned()
    }
}
