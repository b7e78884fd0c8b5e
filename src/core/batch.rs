//! Batch partitioning
//!
//! Splits a dataset into fixed-size batches for sequential insertion.
//! Batches partition the input exactly: concatenating them reproduces the
//! dataset, only the final batch may be short.

use crate::domain::{CohortError, Record, Result};

/// Partition a dataset into batches of at most `batch_size` records
///
/// An empty dataset yields zero batches. The records are moved, not
/// cloned; batch count equals `ceil(len / batch_size)`.
///
/// # Errors
///
/// Returns [`CohortError::Config`] when `batch_size` is zero
pub fn partition(records: Vec<Record>, batch_size: usize) -> Result<Vec<Vec<Record>>> {
    if batch_size == 0 {
        return Err(CohortError::Config(
            "batch_size must be >= 1".to_string(),
        ));
    }

    let mut batches = Vec::with_capacity(records.len().div_ceil(batch_size));
    let mut remaining = records;

    while remaining.len() > batch_size {
        let rest = remaining.split_off(batch_size);
        batches.push(remaining);
        remaining = rest;
    }

    if !remaining.is_empty() {
        batches.push(remaining);
    }

    Ok(batches)
}
