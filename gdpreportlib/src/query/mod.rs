//! Report processing: select a report and run the pipeline.
//!
//! This module handles the third stage of the pipeline - resolving which
//! report was asked for and producing it from the input files. It provides:
//!
//! - **Options**: Configuration for a run (`ReportOptions`, `ReportKind`)
//! - **Report**: Aggregated data ready for presentation
//!
//! ## Example
//!
//! ```rust,ignore
//! use gdpreportlib::query::{run_report, ReportOptions};
//!
//! let report = run_report(&ReportOptions::new().files(["2023.csv"]))?;
//! ```

pub mod options;
pub mod report;

pub use options::{ReportKind, ReportOptions};
pub use report::{run_report, Report};
