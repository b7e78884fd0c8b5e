//! Storage abstraction layer
//!
//! Defines the [`DocumentSink`] trait the load pipeline writes through,
//! keeping the core logic independent of the concrete MongoDB adapter.

pub mod traits;

pub use traits::DocumentSink;
