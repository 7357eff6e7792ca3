//! CSV reading: turn input files into a flat list of records.
//!
//! Each file is parsed as comma-delimited UTF-8 text whose first row names
//! the columns. Only the columns the reports care about are kept; anything
//! else in the file is ignored. Rows shorter than the header are accepted
//! and their missing cells read as absent.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ReportError;
use crate::Result;

/// A column a report can group by or aggregate over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// Country name
    Country,
    /// GDP value, as text
    Gdp,
}

impl Field {
    /// Header label of this column in input files and rendered tables.
    pub fn header(self) -> &'static str {
        match self {
            Field::Country => "country",
            Field::Gdp => "gdp",
        }
    }
}

/// One data row of an input file.
///
/// Cells are kept as raw text. A field is `None` when its column is
/// missing from the file, the row is too short, or the cell is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub country: Option<String>,
    pub gdp: Option<String>,
}

impl Record {
    /// Create a record with both fields present.
    pub fn new(country: impl Into<String>, gdp: impl Into<String>) -> Self {
        Self {
            country: Some(country.into()),
            gdp: Some(gdp.into()),
        }
    }

    /// Raw text of a field, if present.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Country => self.country.as_deref(),
            Field::Gdp => self.gdp.as_deref(),
        }
    }
}

/// Column positions of the known fields within one file's header row.
#[derive(Debug, Clone, Copy, Default)]
struct HeaderIndex {
    country: Option<usize>,
    gdp: Option<usize>,
}

impl HeaderIndex {
    fn from_headers(headers: &StringRecord) -> Self {
        // Later duplicates of a column name win.
        let find = |field: Field| {
            headers
                .iter()
                .enumerate()
                .filter(|(_, h)| *h == field.header())
                .map(|(i, _)| i)
                .last()
        };
        Self {
            country: find(Field::Country),
            gdp: find(Field::Gdp),
        }
    }

    fn record(&self, row: &StringRecord) -> Record {
        let cell = |idx: Option<usize>| {
            idx.and_then(|i| row.get(i))
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        Record {
            country: cell(self.country),
            gdp: cell(self.gdp),
        }
    }
}

/// Read every data row of a single CSV file, in file order.
///
/// Returns [`ReportError::SourceNotFound`] if the path does not exist and
/// [`ReportError::SourceUnreadable`] if it cannot be opened or decoded.
pub fn read_source(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ReportError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| ReportError::unreadable(path, e))?;

    let index = HeaderIndex::from_headers(
        reader
            .headers()
            .map_err(|e| ReportError::unreadable(path, e))?,
    );

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| ReportError::unreadable(path, e))?;
        records.push(index.record(&row));
    }

    debug!(path = %path.display(), rows = records.len(), "read source");
    Ok(records)
}

/// Read several CSV files and concatenate their rows in the order given.
///
/// Stops at the first file that is missing or unreadable.
pub fn read_records<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for path in paths {
        records.extend(read_source(path)?);
    }
    Ok(records)
}
