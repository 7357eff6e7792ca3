//! Output formatting: present reports as tables.
//!
//! This module handles the fourth and final stage of the pipeline -
//! formatting a report for display. It provides:
//!
//! - **ReportTable**: Table-ready data structure with headers and rows
//! - **TableRow**: Individual row with label and formatted value
//!
//! ## Example
//!
//! ```rust,ignore
//! use gdpreportlib::output::ReportTable;
//!
//! let table = ReportTable::from_report(&report);
//! println!("{}", table.render());
//! ```

pub mod table;

pub use table::{render_table, ReportTable, TableRow, NO_DATA_MESSAGE};
