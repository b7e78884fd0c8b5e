// Cohort - CSV to MongoDB batch loader
// Copyright (c) 2025 Cohort Contributors
// Licensed under the MIT License

//! # Cohort - CSV to MongoDB batch loader
//!
//! Cohort is a one-shot batch ingestion tool built in Rust that loads a CSV
//! dataset into a MongoDB collection, validating and normalizing the data
//! on the way in.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Reading** a CSV dataset into column-ordered records
//! - **Validating** the header row and identifier column
//! - **Normalizing** cell values before they become documents
//! - **Loading** documents in fixed-size batches with an idempotent
//!   clear-then-insert protocol
//!
//! ## Architecture
//!
//! Cohort follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (validation, formatting, batching, load)
//! - [`adapters`] - External integrations (CSV files, MongoDB)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cohort::config::load_config;
//! use cohort::core::load::LoadCoordinator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load configuration
//!     let config = load_config("cohort.toml")?;
//!
//!     // Run the load pipeline
//!     let coordinator = LoadCoordinator::new(config);
//!     let summary = coordinator.execute().await?;
//!
//!     println!("Inserted {} documents", summary.documents_inserted);
//!     Ok(())
//! }
//! ```
//!
//! ## Idempotency
//!
//! A load clears the target collection before inserting anything, so
//! re-running the same dataset always converges on the same collection
//! contents. A failed run leaves already-inserted batches in place; the
//! next successful run replaces them wholesale.
//!
//! ## Error Handling
//!
//! Cohort uses the [`domain::CohortError`] type for all errors, following
//! Rust best practices:
//!
//! ```rust,no_run
//! use cohort::domain::CohortError;
//!
//! fn example() -> Result<(), CohortError> {
//!     // Errors are automatically converted using the ? operator
//!     let config = cohort::config::load_config("cohort.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Cohort uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn, error};
//!
//! info!("Starting load");
//! warn!(candidates = ?["id", "patient_id"], "No identifier column found");
//! error!(error = "connection reset by peer", "Load failed");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
