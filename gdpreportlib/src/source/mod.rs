//! Source reading: load input files into records.
//!
//! This module handles the first stage of the pipeline - reading CSV files
//! into a uniform in-memory list of [`Record`]s. It provides:
//!
//! - **Records**: Explicit row type with named optional fields
//! - **Reading**: `read_source` for one file, `read_records` for many
//!
//! ## Example
//!
//! ```rust,ignore
//! use gdpreportlib::source::{read_records, Field};
//!
//! let records = read_records(&["2022.csv", "2023.csv"])?;
//! println!("first country: {:?}", records[0].get(Field::Country));
//! ```

pub mod reader;

pub use reader::{read_records, read_source, Field, Record};
