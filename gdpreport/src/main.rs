//! # gdpreport
//!
//! A CLI tool that prints a ranked average-GDP table from CSV files.
//!
//! ## Overview
//!
//! gdpreport is built on top of gdpreportlib. It reads one or more CSV
//! files with `country` and `gdp` columns, averages GDP per country across
//! all files, and prints the countries from highest to lowest average.
//!
//! ## Usage
//!
//! ```bash
//! # Report over a single file
//! gdpreport --files 2023.csv --report average-gdp
//!
//! # Combine several files (the report defaults to average-gdp)
//! gdpreport --files 2022.csv 2023.csv
//!
//! # Output as JSON
//! gdpreport --files 2023.csv --output json
//!
//! # Log pipeline details to stderr
//! gdpreport --files 2023.csv --verbose
//! ```
//!
//! Any fatal condition (missing or unreadable file, no data rows, unknown
//! report) prints a single `Error:` line on stderr and exits non-zero.

mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use gdpreportlib::{run_report, ReportKind, ReportOptions};
use tracing_subscriber::EnvFilter;

use render::{render_report, OutputMode};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("gdpreport")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Average GDP per country across CSV files, highest first")
        .arg(
            Arg::new("files")
                .long("files")
                .required(true)
                .num_args(1..)
                .action(ArgAction::Append)
                .value_parser(value_parser!(PathBuf))
                .help("CSV files to analyze, read in the order given"),
        )
        .arg(
            Arg::new("report")
                .short('r')
                .long("report")
                .default_value(ReportKind::default().name())
                .help("Report to produce"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(value_parser!(OutputMode))
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log pipeline details to stderr"),
        )
}

/// Install a stderr log subscriber when asked for via --verbose or RUST_LOG.
fn init_tracing(verbose: bool) {
    let from_env = std::env::var_os("RUST_LOG").is_some();
    if !verbose && !from_env {
        return;
    }

    let filter = if from_env {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new("debug")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Build options from matches
fn build_options(matches: &ArgMatches) -> ReportOptions {
    let files: Vec<PathBuf> = matches
        .get_many::<PathBuf>("files")
        .map(|v| v.cloned().collect())
        .unwrap_or_default();
    let report = matches
        .get_one::<String>("report")
        .map(|s| s.as_str())
        .unwrap_or(ReportKind::default().name());

    ReportOptions::new().files(files).report(report)
}

fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let mode = matches
        .get_one::<OutputMode>("output")
        .copied()
        .unwrap_or_default();

    let report = run_report(&build_options(matches))?;
    render_report(&report, mode)
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_tracing(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_valid() {
        build_command().debug_assert();
    }

    #[test]
    fn test_build_options_defaults() {
        let matches = build_command().get_matches_from(["gdpreport", "--files", "a.csv", "b.csv"]);
        let options = build_options(&matches);

        assert_eq!(
            options.files,
            vec![PathBuf::from("a.csv"), PathBuf::from("b.csv")]
        );
        assert_eq!(options.report, "average-gdp");
    }

    #[test]
    fn test_build_options_report_passed_through() {
        let matches = build_command().get_matches_from([
            "gdpreport",
            "--files",
            "a.csv",
            "--report",
            "median-gdp",
        ]);
        assert_eq!(build_options(&matches).report, "median-gdp");
    }

    #[test]
    fn test_output_mode_parsed_by_clap() {
        let matches =
            build_command().get_matches_from(["gdpreport", "--files", "a.csv", "-o", "json"]);
        assert_eq!(
            matches.get_one::<OutputMode>("output").copied(),
            Some(OutputMode::Json)
        );

        let result =
            build_command().try_get_matches_from(["gdpreport", "--files", "a.csv", "-o", "csv"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_files_required() {
        let result = build_command().try_get_matches_from(["gdpreport"]);
        assert!(result.is_err());
    }
}
