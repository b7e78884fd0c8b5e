//! Header validation
//!
//! Checks that every required column is present in the dataset's header
//! row before any content rules run.

use crate::domain::{CohortError, Record, Result};

/// Validates that the dataset contains every required column
///
/// Only the first record is inspected: the CSV reader guarantees all
/// records share the header row, so one lookup per required column is
/// enough.
///
/// # Arguments
///
/// * `records` - The dataset, in file order
/// * `required` - Column names that must be present
///
/// # Errors
///
/// - [`CohortError::EmptyDataset`] when there are zero records
/// - [`CohortError::Schema`] listing every absent required column, in
///   the order the caller listed them
pub fn validate_headers(records: &[Record], required: &[String]) -> Result<()> {
    let first = records.first().ok_or(CohortError::EmptyDataset)?;

    let missing: Vec<String> = required
        .iter()
        .filter(|column| !first.has_column(column))
        .cloned()
        .collect();

    if !missing.is_empty() {
        return Err(CohortError::Schema { missing });
    }

    tracing::debug!(
        columns = first.len(),
        required = required.len(),
        "Header validation passed"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(columns: &[&str]) -> Record {
        Record::from_pairs(columns.iter().map(|c| (*c, Some("x".to_string()))))
    }

    fn required(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_validate_headers_all_present() {
        let records = vec![record(&["Name", "Age", "Gender", "Room"])];

        let result = validate_headers(&records, &required(&["Name", "Age", "Gender"]));

        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_headers_empty_dataset() {
        let records: Vec<Record> = Vec::new();

        let result = validate_headers(&records, &required(&["Name"]));

        assert!(matches!(result, Err(CohortError::EmptyDataset)));
    }

    #[test]
    fn test_validate_headers_reports_all_missing_in_order() {
        let records = vec![record(&["Name", "Room"])];

        let result = validate_headers(&records, &required(&["Name", "Age", "Gender"]));

        match result {
            Err(CohortError::Schema { missing }) => {
                assert_eq!(missing, vec!["Age".to_string(), "Gender".to_string()]);
            }
            other => panic!("Expected Schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_headers_is_case_sensitive() {
        let records = vec![record(&["name", "age", "gender"])];

        let result = validate_headers(&records, &required(&["Name"]));

        assert!(matches!(result, Err(CohortError::Schema { .. })));
    }

    #[test]
    fn test_validate_headers_no_requirements() {
        let records = vec![record(&["Anything"])];

        let result = validate_headers(&records, &[]);

        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_headers_only_inspects_first_record() {
        // Later records never affect the outcome
        let records = vec![record(&["Name", "Age", "Gender"]), record(&["Name"])];

        let result = validate_headers(&records, &required(&["Name", "Age", "Gender"]));

        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_headers_error_message_lists_columns() {
        let records = vec![record(&["Room"])];

        let err = validate_headers(&records, &required(&["Name", "Age"])).unwrap_err();

        assert_eq!(err.to_string(), "Missing required columns: Name, Age");
    }
}
