//!
//! The benchmark merger binary.
//!

pub(crate) mod arguments;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(()) => benchmark_merger::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            benchmark_merger::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let input_paths = input_paths(&arguments)?;

    let (output, warnings) = benchmark_merger::merge(input_paths.iter(), arguments.strategy)?;
    if !arguments.quiet {
        for warning in warnings.iter() {
            eprintln!("{} {warning}", "Warning:".bright_yellow().bold());
        }
        eprintln!(
            "      {} {} test suite(s) from {} file(s) {}",
            "Merged".bright_green().bold(),
            output.test_suites.len(),
            input_paths.len(),
            format!("({})", arguments.strategy).dimmed(),
        );
    }

    match arguments.output_path {
        Some(path) => output.write_to_file(path.as_path())?,
        None => println!("{}", output.to_json()?),
    }

    Ok(())
}

///
/// Resolves the input file list from the arguments or the environment.
///
pub(crate) fn input_paths(arguments: &Arguments) -> anyhow::Result<Vec<PathBuf>> {
    match arguments.input_paths.as_slice() {
        [] => {
            let value = std::env::var_os(arguments.input_variable.as_str()).ok_or_else(|| {
                anyhow::anyhow!(
                    "No input files provided, and the `{}` environment variable is not set",
                    arguments.input_variable
                )
            })?;
            Ok(std::env::split_paths(&value).collect())
        }
        [directory] if directory.is_dir() => {
            let resolution_pattern = format!("{}/**/*.json", directory.to_string_lossy());
            let paths: Vec<PathBuf> = glob::glob(resolution_pattern.as_str())?
                .filter_map(Result::ok)
                .collect();
            if paths.is_empty() {
                anyhow::bail!("No JSON files found in the directory {directory:?}");
            }
            Ok(paths)
        }
        paths => Ok(paths.to_vec()),
    }
}
