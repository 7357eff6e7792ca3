//! # gdpreportlib
//!
//! A library for building ranked per-country GDP reports from CSV files.
//!
//! ## Overview
//!
//! Input files are comma-separated UTF-8 text whose first row names the
//! columns. Every data row is read into a [`Record`]; records are grouped
//! by country, the GDP values of each group are averaged, and the groups are
//! sorted from highest to lowest mean. The result renders as a bordered
//! text table.
//!
//! The pipeline has four stages, one module each:
//!
//! - **source**: Read CSV files into records
//! - **data**: Group and average records
//! - **query**: Select the report and run the stages in order
//! - **output**: Format the report as a table
//!
//! Rows with a blank country, a blank GDP, or a GDP that is not a number are
//! skipped and counted, never treated as errors. Missing or unreadable
//! files, inputs with no data rows, and unknown report names are errors.
//!
//! ## Example
//!
//! ```rust
//! use gdpreportlib::{run_report, ReportOptions, ReportTable};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let first = dir.path().join("2022.csv");
//! let second = dir.path().join("2023.csv");
//! fs::write(&first, "country,year,gdp\nA,2022,100\n").unwrap();
//! fs::write(&second, "country,year,gdp\nB,2023,200\n").unwrap();
//!
//! let report = run_report(&ReportOptions::new().files([&first, &second])).unwrap();
//! let table = ReportTable::from_report(&report);
//! assert_eq!(table.rows[0].label, "B");
//! assert_eq!(table.rows[1].label, "A");
//! println!("{}", table.render());
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod query;
pub mod source;

pub use data::{aggregate_mean, AggregateResult, GroupMean, GroupSamples};
pub use error::ReportError;
pub use output::{render_table, ReportTable, TableRow, NO_DATA_MESSAGE};
pub use query::{run_report, Report, ReportKind, ReportOptions};
pub use source::{read_records, read_source, Field, Record};

/// Result type for gdpreportlib operations
pub type Result<T> = std::result::Result<T, ReportError>;
