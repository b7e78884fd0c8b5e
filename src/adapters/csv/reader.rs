//! CSV dataset reader
//!
//! Reads the input file into memory as a `Vec<Record>`. The whole file is
//! materialized before any validation runs; this tool targets datasets
//! that fit comfortably in memory.

use crate::domain::{CohortError, Record, Result};
use std::path::Path;

/// Read a CSV file into an ordered dataset
///
/// The first line is the header row; every subsequent row becomes one
/// [`Record`] pairing headers with values in column order. Geometry is
/// strict: a row with a different field count than the header is a parse
/// error, not padded or truncated.
///
/// # Errors
///
/// - [`CohortError::SourceNotFound`] when the path does not exist
/// - [`CohortError::Parse`] for malformed CSV (bad quoting, ragged rows)
pub fn read_dataset(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(CohortError::SourceNotFound {
            path: path.display().to_string(),
        });
    }

    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(Record::from_pairs(
            headers
                .iter()
                .zip(row.iter())
                .map(|(header, value)| (header, Some(value.to_string()))),
        ));
    }

    tracing::info!(
        path = %path.display(),
        rows = records.len(),
        columns = headers.len(),
        "Loaded CSV dataset"
    );

    Ok(records)
}
