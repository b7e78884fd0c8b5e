//! MongoDB integration
//!
//! This module provides the MongoDB implementation of the storage sink,
//! plus the connection retry policy used while waiting for the server to
//! come up.

pub mod client;
pub mod retry;

pub use client::MongoStore;
pub use retry::RetryPolicy;
