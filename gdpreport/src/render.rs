//! Output rendering for the CLI: text table or JSON

use clap::ValueEnum;
use gdpreportlib::{Report, ReportTable};

/// How a finished report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// Bordered fixed-width table
    #[default]
    Text,
    /// Pretty-printed JSON of the table data
    Json,
}

/// Render a report for the given output mode, without a trailing newline.
pub fn render_report(report: &Report, mode: OutputMode) -> anyhow::Result<String> {
    let table = ReportTable::from_report(report);
    match mode {
        OutputMode::Text => Ok(table.render()),
        OutputMode::Json => Ok(serde_json::to_string_pretty(&table)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gdpreportlib::{aggregate_mean, Field, Record, ReportKind, NO_DATA_MESSAGE};

    fn report(records: &[Record]) -> Report {
        Report {
            kind: ReportKind::AverageGdp,
            result: aggregate_mean(records, Field::Country, Field::Gdp),
        }
    }

    #[test]
    fn test_output_mode_values() {
        assert_eq!(OutputMode::from_str("text", false).unwrap(), OutputMode::Text);
        assert_eq!(OutputMode::from_str("json", false).unwrap(), OutputMode::Json);
        assert!(OutputMode::from_str("csv", false).is_err());
    }

    #[test]
    fn test_render_text() {
        let report = report(&[Record::new("X", "1")]);
        let output = render_report(&report, OutputMode::Text).unwrap();
        assert!(output.starts_with("+---------+------+"));
        assert!(output.contains("| X       | 1.00 |"));
    }

    #[test]
    fn test_render_text_empty() {
        let report = report(&[Record::new("X", "n/a")]);
        let output = render_report(&report, OutputMode::Text).unwrap();
        assert_eq!(output, NO_DATA_MESSAGE);
    }

    #[test]
    fn test_render_json() {
        let report = report(&[Record::new("X", "10"), Record::new("Y", "")]);
        let output = render_report(&report, OutputMode::Json).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["title"], "average-gdp");
        assert_eq!(parsed["headers"][0], "country");
        assert_eq!(parsed["rows"][0]["label"], "X");
        assert_eq!(parsed["rows"][0]["value"], "10.00");
        assert_eq!(parsed["skipped"], 1);
    }
}
