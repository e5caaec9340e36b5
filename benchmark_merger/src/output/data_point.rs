//!
//! A named sample series of a test.
//!

use crate::output::policy::Policy;

///
/// A named sample series of a test.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    /// The series name, for example `real_time`.
    pub name: String,
    /// The samples, never reduced.
    pub values: Vec<f64>,
    /// The unit of the samples.
    pub unit: String,
    /// The regression detection policy.
    #[serde(flatten)]
    pub policy: Policy,
}
