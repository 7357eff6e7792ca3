//! Input options for report runs.
//!
//! This module contains the configuration types that select which files
//! are read and which report is produced from them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ReportError;
use crate::source::Field;

/// Kind of report to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    /// Mean GDP per country, highest first
    #[default]
    AverageGdp,
}

impl ReportKind {
    /// Name used to request this report on the command line.
    pub fn name(self) -> &'static str {
        match self {
            ReportKind::AverageGdp => "average-gdp",
        }
    }

    /// Every supported report kind.
    pub fn all() -> &'static [ReportKind] {
        &[ReportKind::AverageGdp]
    }

    /// The (group key, value) fields this report aggregates.
    pub fn fields(self) -> (Field, Field) {
        match self {
            ReportKind::AverageGdp => (Field::Country, Field::Gdp),
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReportKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportKind::all()
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ReportError::UnknownReportKind(s.to_string()))
    }
}

/// Options for a report run.
///
/// The report name is kept as given and only resolved after the input
/// files have been read, so file errors take precedence over an unknown
/// report name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Input CSV files, read in this order
    pub files: Vec<PathBuf>,
    /// Requested report name
    pub report: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            report: ReportKind::default().name().to_string(),
        }
    }
}

impl ReportOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input files.
    pub fn files<I, P>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.files = files.into_iter().map(Into::into).collect();
        self
    }

    /// Set the requested report name.
    pub fn report(mut self, name: impl Into<String>) -> Self {
        self.report = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_kind_from_str() {
        assert_eq!(
            "average-gdp".parse::<ReportKind>().unwrap(),
            ReportKind::AverageGdp
        );
    }

    #[test]
    fn test_report_kind_unknown() {
        let err = "median-gdp".parse::<ReportKind>().unwrap_err();
        assert!(matches!(err, ReportError::UnknownReportKind(ref name) if name == "median-gdp"));
        assert_eq!(err.to_string(), "unknown report kind 'median-gdp'");
    }

    #[test]
    fn test_report_kind_is_case_sensitive() {
        assert!("Average-GDP".parse::<ReportKind>().is_err());
    }

    #[test]
    fn test_report_kind_display_roundtrips_name() {
        for kind in ReportKind::all() {
            assert_eq!(kind.to_string().parse::<ReportKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn test_options_builder() {
        let options = ReportOptions::new().files(["a.csv", "b.csv"]);
        assert_eq!(
            options.files,
            vec![PathBuf::from("a.csv"), PathBuf::from("b.csv")]
        );
        assert_eq!(options.report, "average-gdp");

        let options = options.report("other");
        assert_eq!(options.report, "other");
    }
}
