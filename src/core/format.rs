//! Row formatting
//!
//! Normalizes records before storage: string values lose leading and
//! trailing whitespace, null values pass through, column order is
//! preserved. Formatting is pure and idempotent.

use crate::domain::Record;

/// Produce a normalized copy of a record
pub fn format_record(record: &Record) -> Record {
    Record::from_pairs(
        record
            .iter()
            .map(|(column, value)| (column, value.map(|v| v.trim().to_string()))),
    )
}

/// Normalize an entire dataset, preserving record order
pub fn format_dataset(records: &[Record]) -> Vec<Record> {
    records.iter().map(format_record).collect()
}
