//! Core business logic for Cohort.
//!
//! This module contains the validation-and-batching pipeline and the load
//! orchestration.
//!
//! # Modules
//!
//! - [`validate`] - Header and content validation
//! - [`format`] - Row normalization (whitespace trim)
//! - [`batch`] - Fixed-size batch partitioning
//! - [`load`] - Load orchestration, storage protocol, and summary
//!
//! # Load Workflow
//!
//! The typical load workflow:
//!
//! 1. **Stage**: Copy the seed file into place if the dataset is missing
//! 2. **Read**: Materialize the CSV into ordered records
//! 3. **Validate**: Required columns, then identifier presence
//! 4. **Format**: Trim string values
//! 5. **Partition**: Split into fixed-size batches
//! 6. **Clear**: Empty the target collection (idempotency)
//! 7. **Insert**: One batch at a time, logging the running total
//! 8. **Report**: Generate the load summary
//!
//! # Example
//!
//! ```rust,no_run
//! use cohort::config::load_config;
//! use cohort::core::load::LoadCoordinator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("cohort.toml")?;
//!
//! let coordinator = LoadCoordinator::new(config);
//! let summary = coordinator.execute().await?;
//!
//! println!("Rows: {}", summary.rows_read);
//! println!("Inserted: {}", summary.documents_inserted);
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod format;
pub mod load;
pub mod validate;
