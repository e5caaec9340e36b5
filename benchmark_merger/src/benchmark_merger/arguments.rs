//!
//! The benchmark merger arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark merger arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Suppresses the terminal output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Input files, merged in the given order.
    /// If only one path is provided and it is a directory, its JSON files are merged.
    /// If none are provided, the list is read from the `--input-variable` environment variable.
    pub input_paths: Vec<PathBuf>,

    /// Environment variable with the input file list, joined by the platform path-list delimiter.
    #[arg(long, default_value = benchmark_merger::DEFAULT_INPUT_VARIABLE)]
    pub input_variable: String,

    /// Grouping strategy: `by-executable` (default) or `by-test-function`.
    #[arg(long, default_value_t = benchmark_merger::Strategy::ByExecutable)]
    pub strategy: benchmark_merger::Strategy,

    /// Output file. If not provided, the result is printed to stdout.
    #[arg(long)]
    pub output_path: Option<PathBuf>,
}
