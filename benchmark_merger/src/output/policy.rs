//!
//! Regression detection policies attached to every data point series.
//!

///
/// The statistic the regression engine reduces a series to.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AggregationPolicy {
    /// The median of the samples.
    Median,
}

///
/// The way two aggregated values are compared.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiffPolicy {
    /// The difference relative to the reference value, in percent.
    RelativeDifference,
}

///
/// The direction of a change considered a regression.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RegressionPolicy {
    /// Lower values are better, so an increase beyond the argument is a regression.
    LessIsBetter,
}

///
/// Regression detection policy of a data point series.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    /// The aggregation policy.
    pub aggregation_policy: AggregationPolicy,
    /// The diff policy.
    pub diff_policy: DiffPolicy,
    /// The regression policy.
    pub regression_policy: RegressionPolicy,
    /// The regression threshold, interpreted by the regression engine.
    pub regression_argument: u32,
}

impl Policy {
    /// The policy applied to timing series.
    pub const TIMING: Self = Self {
        aggregation_policy: AggregationPolicy::Median,
        diff_policy: DiffPolicy::RelativeDifference,
        regression_policy: RegressionPolicy::LessIsBetter,
        regression_argument: 20,
    };
}

///
/// The name of a data point series.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesName {
    /// The wall clock time.
    RealTime,
    /// The CPU time.
    CpuTime,
}

impl std::fmt::Display for SeriesName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RealTime => write!(f, "real_time"),
            Self::CpuTime => write!(f, "cpu_time"),
        }
    }
}

/// The series emitted for every test, in output order, with their policies.
pub const SERIES: [(SeriesName, Policy); 2] = [
    (SeriesName::RealTime, Policy::TIMING),
    (SeriesName::CpuTime, Policy::TIMING),
];
