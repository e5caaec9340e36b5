//!
//! The configuration context, used to detect merging of reports from incompatible environments.
//!


use std::path::Path;

use crate::input::context::Context;
use crate::input::Input;
use crate::warning::Warning;

/// The context fields that change between runs in the same environment.
pub const VOLATILE_FIELDS: [&str; 3] = ["date", "executable", "load_avg"];

///
/// The configuration context, used to detect merging of reports from incompatible environments.
///
/// Contains every context field except the volatile ones.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ConfigContext(pub serde_json::Map<String, serde_json::Value>);

impl From<&Context> for ConfigContext {
    fn from(context: &Context) -> Self {
        let mut fields = context.fields.clone();
        for field in VOLATILE_FIELDS.iter() {
            fields.remove(*field);
        }
        Self(fields)
    }
}

///
/// Extracts the configuration context of `input` and compares it to `baseline`.
///
/// Returns the extracted context, which is the baseline for the next file, and a warning
/// naming `path` if the contexts differ. The drift never stops the merge.
///
pub fn validate(
    baseline: Option<&ConfigContext>,
    input: &Input,
    path: &Path,
) -> (ConfigContext, Option<Warning>) {
    let context = ConfigContext::from(&input.context);
    let warning = match baseline {
        Some(baseline) if baseline != &context => Some(Warning::ContextDrift {
            path: path.to_path_buf(),
        }),
        _ => None,
    };
    (context, warning)
}
