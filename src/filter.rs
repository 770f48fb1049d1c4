// src/filter.rs
//! Attribute value sets and case-insensitive filtering over records.

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::{Error, Result};
use crate::record::{AttrPath, Record};

/// Distinct non-empty values of `path` across `records`, sorted ascending.
/// Records without the attribute contribute nothing.
pub fn distinct_values(records: &[Record], path: &AttrPath) -> Vec<String> {
    let set: BTreeSet<&str> = records.iter().filter_map(|r| r.scalar(path)).collect();
    set.into_iter().map(String::from).collect()
}

/// Records whose value at `path` equals `target`, ignoring case. Original order is kept.
/// A missing attribute compares as `""`.
pub fn matching<'a>(records: &'a [Record], path: &AttrPath, target: &str) -> Vec<&'a Record> {
    let target = target.to_lowercase();
    let out: Vec<&Record> = records
        .iter()
        .filter(|r| r.scalar_or_empty(path).to_lowercase() == target)
        .collect();
    debug!(%path, %target, matched = out.len(), of = records.len(), "filtered records");
    out
}

/// Check a user's choice against the value set.
///
/// `choice` must equal one of `values` ignoring case; surrounding whitespace is dropped.
/// Returns the trimmed choice as typed, which is what the page is filtered by.
pub fn resolve_choice(values: &[String], choice: &str) -> Result<String> {
    let choice = choice.trim();
    let lc = choice.to_lowercase();
    if values.iter().any(|v| v.to_lowercase() == lc) {
        Ok(s!(choice))
    } else {
        Err(Error::InvalidSelection(s!(choice)))
    }
}
