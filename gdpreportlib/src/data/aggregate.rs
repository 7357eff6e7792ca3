//! Group records by a key field and average a numeric field per group.
//!
//! Rows with an empty key, an empty value, or a value that does not parse
//! as a number (or parses as NaN) are skipped without error. Groups come out sorted by
//! mean, largest first; groups with equal means keep the order in which
//! their key first appeared in the input.

use std::cmp::Ordering;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::source::{Field, Record};

/// Running sum and count of the samples seen for one group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GroupSamples {
    pub sum: f64,
    pub count: u64,
}

impl GroupSamples {
    pub fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    /// Arithmetic mean of the pushed samples.
    ///
    /// Only meaningful once at least one sample was pushed; the aggregator
    /// never creates an empty group.
    pub fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }
}

/// One output row: a group key and its mean value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupMean {
    /// Trimmed group key (e.g. country name)
    pub key: String,
    /// Mean of all samples for this key
    pub mean: f64,
    /// Number of samples averaged
    pub samples: u64,
}

/// Ordered per-group means plus bookkeeping about what was used.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
    /// Field records were grouped by
    pub key_field: Field,
    /// Field that was averaged
    pub value_field: Field,
    /// Groups sorted by mean descending (stable)
    pub items: Vec<GroupMean>,
    /// Records that contributed a sample
    pub used: usize,
    /// Records skipped for a missing key or a missing/unparseable value
    pub skipped: usize,
}

impl AggregateResult {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Extract a `(key, value)` sample from a record, if it has a usable one.
fn sample(record: &Record, key_field: Field, value_field: Field) -> Option<(&str, f64)> {
    let key = record.get(key_field)?.trim();
    let value = record.get(value_field)?.trim();
    if key.is_empty() || value.is_empty() {
        return None;
    }
    let value: f64 = value.parse().ok()?;
    (!value.is_nan()).then_some((key, value))
}

/// Average `value_field` over records grouped by `key_field`.
pub fn aggregate_mean(records: &[Record], key_field: Field, value_field: Field) -> AggregateResult {
    let mut groups: IndexMap<&str, GroupSamples> = IndexMap::new();
    let mut skipped = 0;

    for record in records {
        match sample(record, key_field, value_field) {
            Some((key, value)) => groups.entry(key).or_default().push(value),
            None => skipped += 1,
        }
    }

    let mut items: Vec<GroupMean> = groups
        .into_iter()
        .map(|(key, samples)| GroupMean {
            key: key.to_string(),
            mean: samples.mean(),
            samples: samples.count,
        })
        .collect();

    // sort_by is stable: ties stay in first-seen order. A group holding both
    // +inf and -inf averages to NaN and compares equal to everything.
    items.sort_by(|a, b| b.mean.partial_cmp(&a.mean).unwrap_or(Ordering::Equal));

    let used = records.len() - skipped;
    debug!(
        groups = items.len(),
        used,
        skipped,
        key = key_field.header(),
        value = value_field.header(),
        "aggregated records"
    );

    AggregateResult {
        key_field,
        value_field,
        items,
        used,
        skipped,
    }
}
