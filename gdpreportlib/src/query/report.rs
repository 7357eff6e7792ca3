//! Report pipeline: read, validate, and aggregate.
//!
//! The pipeline is:
//! 1. Records (concatenated rows of every input file)
//! 2. Non-empty check
//! 3. Report kind resolution
//! 4. AggregateResult (grouped, averaged, sorted)
//!
//! Rendering is left to the `output` module.

use serde::Serialize;
use tracing::debug;

use crate::data::{aggregate_mean, AggregateResult};
use crate::error::ReportError;
use crate::source::read_records;
use crate::Result;

use super::options::{ReportKind, ReportOptions};

/// A finished report, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Which report was produced
    pub kind: ReportKind,
    /// Per-group results in display order
    pub result: AggregateResult,
}

/// Run a report over the configured input files.
///
/// Fails with the first missing or unreadable file, with
/// [`ReportError::NoData`] if the files hold no data rows at all, and with
/// [`ReportError::UnknownReportKind`] if the report name is not supported.
/// Rows that are unusable for the report are skipped, not errors; if every
/// row is skipped the report is simply empty.
///
/// # Example
///
/// ```rust
/// use gdpreportlib::{run_report, ReportOptions};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let path = dir.path().join("gdp.csv");
/// fs::write(&path, "country,gdp\nX,10\nX,20\nY,5\n").unwrap();
///
/// let report = run_report(&ReportOptions::new().files([&path])).unwrap();
/// assert_eq!(report.result.items[0].key, "X");
/// assert_eq!(report.result.items[0].mean, 15.0);
/// ```
pub fn run_report(options: &ReportOptions) -> Result<Report> {
    let records = read_records(&options.files)?;
    if records.is_empty() {
        return Err(ReportError::NoData);
    }
    debug!(
        files = options.files.len(),
        records = records.len(),
        "loaded records"
    );

    let kind: ReportKind = options.report.parse()?;
    let (key_field, value_field) = kind.fields();
    let result = match kind {
        ReportKind::AverageGdp => aggregate_mean(&records, key_field, value_field),
    };

    Ok(Report { kind, result })
}
