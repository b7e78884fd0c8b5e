//! CSV record model
//!
//! A [`Record`] is one data row of the input file: an ordered mapping from
//! column name to value. Column order follows the header row, and a dataset
//! is simply a `Vec<Record>` in file order.

/// Candidate identifier-column names, in priority order.
///
/// Detection is first-match: the earliest name in this list that appears in
/// a dataset's columns becomes the identifier column. The ordering is a
/// design parameter, not data-driven.
pub const IDENTIFIER_CANDIDATES: [&str; 6] =
    ["id", "ID", "Id", "patient_id", "PatientID", "patientId"];

/// A single CSV row as an ordered column → value mapping.
///
/// Values are `Option<String>`: `None` models an absent/null field as
/// distinct from empty text. Records are immutable once read; the row
/// formatter produces new records rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    fields: Vec<(String, Option<String>)>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Build a record from (column, value) pairs, preserving order
    pub fn from_pairs<I, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (C, Option<String>)>,
        C: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(column, value)| (column.into(), value))
                .collect(),
        }
    }

    /// Append a column to the record
    pub fn push(&mut self, column: impl Into<String>, value: Option<String>) {
        self.fields.push((column.into(), value));
    }

    /// Number of columns in the record
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the record has no columns
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Check if a column exists, regardless of its value
    pub fn has_column(&self, column: &str) -> bool {
        self.fields.iter().any(|(name, _)| name == column)
    }

    /// Look up a value by column name
    ///
    /// Returns `None` when the column is absent or its value is null.
    pub fn value(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .and_then(|(_, value)| value.as_deref())
    }

    /// Check if a column's value is missing or blank
    ///
    /// Absent columns, null values, empty strings and whitespace-only
    /// strings all count as blank.
    pub fn is_blank(&self, column: &str) -> bool {
        match self.value(column) {
            Some(value) => value.trim().is_empty(),
            None => true,
        }
    }

    /// Iterate over column names in order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Iterate over (column, value) pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }
}
