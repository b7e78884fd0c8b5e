//! External system integrations for Cohort.
//!
//! This module provides adapters for the two edges of the pipeline:
//!
//! - [`csv`] - CSV input (seed staging and dataset reading)
//! - [`storage`] - Storage abstraction layer (trait-based)
//! - [`mongodb`] - MongoDB implementation of the storage sink
//!
//! # Design Pattern
//!
//! Adapters isolate external dependencies so the core pipeline stays
//! testable: the load coordinator talks to a [`storage::DocumentSink`]
//! trait object, and tests substitute an in-memory implementation.
//!
//! # MongoDB Adapter
//!
//! ```rust,no_run
//! use cohort::adapters::mongodb::{MongoStore, RetryPolicy};
//! use cohort::config::MongoDbConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MongoDbConfig::default();
//! let policy = RetryPolicy::single_attempt();
//!
//! let store = MongoStore::connect(&config, &policy).await?;
//! // Use store for clear/insert/count operations
//! # Ok(())
//! # }
//! ```

pub mod csv;
pub mod mongodb;
pub mod storage;
