//! Error types for gdpreportlib

use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions that abort a report run.
///
/// Per-row problems (empty country, unparseable GDP) are never errors; the
/// aggregator skips those rows and counts them instead.
#[derive(Error, Debug)]
pub enum ReportError {
    /// A requested input file does not exist
    #[error("file '{}' not found", path.display())]
    SourceNotFound { path: PathBuf },

    /// An input file exists but could not be read or decoded as CSV
    #[error("failed to read file '{}': {source}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// All inputs combined produced zero data rows
    #[error("no data found in input files")]
    NoData,

    /// The requested report kind is not implemented
    #[error("unknown report kind '{0}'")]
    UnknownReportKind(String),
}

impl ReportError {
    pub(crate) fn unreadable(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        ReportError::SourceUnreadable {
            path: path.into(),
            source,
        }
    }
}
