//!
//! The benchmark merger library.
//!

pub mod accumulator;
pub mod context;
pub mod input;
pub mod merger;
pub mod output;
pub mod strategy;
pub mod warning;

pub use crate::accumulator::perf_test::PerfTest;
pub use crate::accumulator::suite::Suite as AccumulatorSuite;
pub use crate::accumulator::Accumulator;
pub use crate::context::ConfigContext;
pub use crate::input::context::Context as InputContext;
pub use crate::input::error::Error as InputError;
pub use crate::input::record::Entry as InputEntry;
pub use crate::input::record::Record as InputRecord;
pub use crate::input::Input;
pub use crate::merger::error::Error as MergeError;
pub use crate::merger::merge;
pub use crate::merger::Merger;
pub use crate::output::data_point::DataPoint;
pub use crate::output::policy::AggregationPolicy;
pub use crate::output::policy::DiffPolicy;
pub use crate::output::policy::Policy;
pub use crate::output::policy::RegressionPolicy;
pub use crate::output::policy::SeriesName;
pub use crate::output::test::Test;
pub use crate::output::test_suite::TestSuite;
pub use crate::output::Output;
pub use crate::strategy::key::Key;
pub use crate::strategy::Strategy;
pub use crate::warning::Warning;

/// The environment variable the input file list is read from by default.
pub const DEFAULT_INPUT_VARIABLE: &str = "BENCHMARK_BENCHMARK_OUT";

/// The successful exit code.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The failure exit code.
pub const EXIT_CODE_FAILURE: i32 = 1;
