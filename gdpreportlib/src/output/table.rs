//! Table-ready data structures for report output.
//!
//! This module provides `ReportTable`, a presentation-ready structure that
//! can be rendered as a bordered fixed-width text table or serialized to
//! JSON.
//!
//! The data flow is:
//! 1. Report (sorted per-group means)
//! 2. ReportTable (formatted strings for display)
//! 3. Text block or JSON
//!
//! ReportTable is a pure presentation layer - it only formats data, no
//! filtering or sorting logic.

use serde::{Deserialize, Serialize};

use crate::data::AggregateResult;
use crate::query::Report;

/// Printed instead of a table when no group survived aggregation.
pub const NO_DATA_MESSAGE: &str = "No data for report";

/// A single data row of the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Group key (country name)
    pub label: String,
    /// Mean value with two decimals
    pub value: String,
}

/// Table-ready report data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTable {
    /// Report name (e.g. "average-gdp")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Column headers: [key header, value header]
    pub headers: [String; 2],
    /// Data rows in display order
    pub rows: Vec<TableRow>,
    /// Input rows left out of the report
    pub skipped: usize,
}

impl ReportTable {
    /// Create a table from a finished report.
    pub fn from_report(report: &Report) -> Self {
        Self {
            title: Some(report.kind.name().to_string()),
            ..Self::from_result(&report.result)
        }
    }

    /// Create an untitled table from aggregation output.
    pub fn from_result(result: &AggregateResult) -> Self {
        let headers = [
            result.key_field.header().to_string(),
            result.value_field.header().to_string(),
        ];
        let rows = result
            .items
            .iter()
            .map(|group| TableRow {
                label: group.key.clone(),
                value: format_value(group.mean),
            })
            .collect();

        Self {
            title: None,
            headers,
            rows,
            skipped: result.skipped,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render as a bordered text table, or [`NO_DATA_MESSAGE`] if empty.
    ///
    /// The result has no trailing newline.
    pub fn render(&self) -> String {
        if self.is_empty() {
            return NO_DATA_MESSAGE.to_string();
        }

        let [key_header, value_header] = &self.headers;
        let key_width = column_width(key_header, self.rows.iter().map(|r| r.label.as_str()));
        let value_width = column_width(value_header, self.rows.iter().map(|r| r.value.as_str()));

        let separator = format!(
            "+{}+{}+",
            "-".repeat(key_width + 2),
            "-".repeat(value_width + 2)
        );

        let mut lines = Vec::with_capacity(self.rows.len() + 4);
        lines.push(separator.clone());
        lines.push(format!(
            "| {:^kw$} | {:^vw$} |",
            key_header,
            value_header,
            kw = key_width,
            vw = value_width
        ));
        lines.push(separator.clone());
        for row in &self.rows {
            lines.push(format!(
                "| {:<kw$} | {:>vw$} |",
                row.label,
                row.value,
                kw = key_width,
                vw = value_width
            ));
        }
        lines.push(separator);

        lines.join("\n")
    }
}

/// Render aggregation output directly as text.
pub fn render_table(result: &AggregateResult) -> String {
    ReportTable::from_result(result).render()
}

fn format_value(value: f64) -> String {
    format!("{:.2}", value)
}

/// Width of a column: the widest of its header and cells, in characters.
fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells
        .map(|cell| cell.chars().count())
        .fold(header.chars().count(), usize::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::GroupMean;
    use crate::source::Field;

    fn result(items: &[(&str, f64)]) -> AggregateResult {
        AggregateResult {
            key_field: Field::Country,
            value_field: Field::Gdp,
            items: items
                .iter()
                .map(|(key, mean)| GroupMean {
                    key: key.to_string(),
                    mean: *mean,
                    samples: 1,
                })
                .collect(),
            used: items.len(),
            skipped: 0,
        }
    }

    #[test]
    fn test_render_basic_table() {
        let table = render_table(&result(&[("X", 15.0), ("Y", 5.0)]));
        let expected = "\
+---------+-------+
| country |  gdp  |
+---------+-------+
| X       | 15.00 |
| Y       |  5.00 |
+---------+-------+";
        assert_eq!(table, expected);
    }

    #[test]
    fn test_render_wide_key_and_value() {
        let table = render_table(&result(&[("United States", 23315.081), ("Chad", 11.78)]));
        let expected = "\
+---------------+----------+
|    country    |   gdp    |
+---------------+----------+
| United States | 23315.08 |
| Chad          |    11.78 |
+---------------+----------+";
        assert_eq!(table, expected);
    }

    #[test]
    fn test_render_width_counts_characters() {
        let table = render_table(&result(&[("Россия", 2240.42), ("Côte d'Ivoire", 70.0)]));
        let lines: Vec<&str> = table.lines().collect();

        let widths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
        assert_eq!(lines[3], "| Россия        | 2240.42 |");
    }

    #[test]
    fn test_render_infinite_mean() {
        let table = render_table(&result(&[("X", f64::INFINITY), ("Z", 5.0)]));
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[1], "| country | gdp  |");
        assert_eq!(lines[3], "| X       |  inf |");
        assert_eq!(lines[4], "| Z       | 5.00 |");
    }

    #[test]
    fn test_render_empty_is_no_data_message() {
        assert_eq!(render_table(&result(&[])), NO_DATA_MESSAGE);
    }

    #[test]
    fn test_values_rounded_to_two_decimals() {
        let table = ReportTable::from_result(&result(&[("A", 1.005), ("B", 2.0 / 3.0), ("C", -0.5)]));
        let values: Vec<_> = table.rows.iter().map(|r| r.value.as_str()).collect();
        // 1.005 is stored as 1.00499999...
        assert_eq!(values, vec!["1.00", "0.67", "-0.50"]);
    }

    #[test]
    fn test_from_report_sets_title_and_skipped() {
        let mut aggregate = result(&[("X", 1.0)]);
        aggregate.skipped = 3;
        let report = Report {
            kind: crate::query::ReportKind::AverageGdp,
            result: aggregate,
        };

        let table = ReportTable::from_report(&report);
        assert_eq!(table.title.as_deref(), Some("average-gdp"));
        assert_eq!(table.headers, ["country".to_string(), "gdp".to_string()]);
        assert_eq!(table.skipped, 3);
    }
}
