//! Load orchestration
//!
//! This module provides the load pipeline for Cohort, including:
//! - Pipeline sequencing (stage, read, validate, format, partition)
//! - The idempotent clear-then-insert storage protocol
//! - Summary and reporting

pub mod coordinator;
pub mod summary;

pub use coordinator::LoadCoordinator;
pub use summary::LoadSummary;
