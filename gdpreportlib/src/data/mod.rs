//! Aggregation: group records and compute per-group statistics.
//!
//! This module handles the second stage of the pipeline - turning the flat
//! record list into an ordered key → mean mapping. It provides:
//!
//! - **Accumulation**: `GroupSamples` running sum/count per group
//! - **Aggregation**: `aggregate_mean` producing a sorted `AggregateResult`
//!
//! ## Example
//!
//! ```rust,ignore
//! use gdpreportlib::data::aggregate_mean;
//! use gdpreportlib::source::Field;
//!
//! let result = aggregate_mean(&records, Field::Country, Field::Gdp);
//! for group in &result.items {
//!     println!("{}: {:.2}", group.key, group.mean);
//! }
//! ```

pub mod aggregate;

pub use aggregate::{aggregate_mean, AggregateResult, GroupMean, GroupSamples};
