//! Dataset validation
//!
//! Two independent stages run before any formatting or storage work:
//! header validation (required columns) and content validation (identifier
//! presence). Both treat an empty dataset as fatal.

pub mod content;
pub mod headers;

pub use content::{detect_identifier_column, validate_content, IdentifierCheck};
pub use headers::validate_headers;
