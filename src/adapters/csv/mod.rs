//! CSV input integration
//!
//! This module provides the row source for the load pipeline: optional
//! seed staging followed by a full in-memory read of the dataset.

pub mod reader;
pub mod staging;

pub use reader::read_dataset;
pub use staging::stage_input;
