//! Content validation
//!
//! Detects the dataset's identifier column and enforces that every record
//! carries a usable identifier value. Detection is first-match over
//! [`IDENTIFIER_CANDIDATES`]; whether a missing column is fatal depends on
//! the strict flag.

use crate::domain::{CohortError, Record, Result, IDENTIFIER_CANDIDATES};

/// Outcome of content validation
///
/// Distinguishes a dataset whose identifier values were actually checked
/// from one where the check was skipped because no candidate column exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierCheck {
    /// An identifier column was found and every record has a value in it
    Verified {
        /// The detected column name
        column: &'static str,
    },
    /// No candidate column exists; records were not scanned
    Skipped,
}

/// Finds the identifier column of a dataset, if any
///
/// Candidates are tried in [`IDENTIFIER_CANDIDATES`] order against the
/// first record's columns; the first present name wins even when several
/// candidates exist.
pub fn detect_identifier_column(records: &[Record]) -> Option<&'static str> {
    let first = records.first()?;

    IDENTIFIER_CANDIDATES
        .iter()
        .find(|candidate| first.has_column(candidate))
        .copied()
}

/// Validates identifier presence across the dataset
///
/// When a candidate column exists, every record must have a non-blank
/// value in it (blank means absent, null, empty, or whitespace-only).
/// When none exists, `strict_id` decides between failing and logging a
/// warning; in the lenient case no record is scanned at all.
///
/// # Errors
///
/// - [`CohortError::EmptyDataset`] when there are zero records
/// - [`CohortError::MissingIdentifierColumn`] in strict mode with no
///   candidate column
/// - [`CohortError::RequiredField`] naming the first offending record
///   (zero-based) and the detected column
pub fn validate_content(records: &[Record], strict_id: bool) -> Result<IdentifierCheck> {
    if records.is_empty() {
        return Err(CohortError::EmptyDataset);
    }

    let column = match detect_identifier_column(records) {
        Some(column) => column,
        None => {
            if strict_id {
                return Err(CohortError::MissingIdentifierColumn);
            }
            tracing::warn!(
                candidates = IDENTIFIER_CANDIDATES.join(", "),
                "No identifier column found, skipping identifier check"
            );
            return Ok(IdentifierCheck::Skipped);
        }
    };

    for (row, record) in records.iter().enumerate() {
        if record.is_blank(column) {
            return Err(CohortError::RequiredField {
                row,
                column: column.to_string(),
            });
        }
    }

    tracing::debug!(
        column = column,
        rows = records.len(),
        "Identifier check passed"
    );

    Ok(IdentifierCheck::Verified { column })
}
