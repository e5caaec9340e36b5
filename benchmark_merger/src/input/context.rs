//!
//! The environment description written by the benchmark harness.
//!

///
/// The environment description written by the benchmark harness.
///
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Context {
    /// Path to the benchmark executable.
    /// Only required when suites are named after the executable.
    #[serde(default)]
    pub executable: Option<String>,
    /// The remaining fields, for example `host_name`, `num_cpus`, `library_build_type`.
    /// Fields that vary from run to run, like `date` and `load_avg`, are kept here as well.
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}
