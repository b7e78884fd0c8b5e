//! In-memory protection for the MongoDB password.
//!
//! The one secret this tool handles is `mongodb.password`. It spends its
//! life inside a configuration struct that gets debug-formatted and logged,
//! so the raw string is wrapped in a [`Secret`] that redacts `Debug` output
//! and zeroes the backing memory on drop. The value leaves the wrapper only
//! at the credential-building site, through an explicit
//! [`expose_secret()`](secrecy::ExposeSecret::expose_secret) call.
//!
//! # Example
//!
//! ```rust
//! use cohort::config::secret_string;
//! use secrecy::ExposeSecret;
//!
//! let password = secret_string("hunter2".to_string());
//! let shown = format!("{password:?}");
//!
//! assert!(!shown.contains("hunter2"));
//! assert_eq!(password.expose_secret(), "hunter2");
//! ```

use secrecy::{CloneableSecret, DebugSecret, Secret, SerializableSecret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

/// String newtype carrying the marker traits [`Secret`] requires
#[derive(Clone, Debug, Zeroize)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}
impl SerializableSecret for SecretValue {}

impl From<String> for SecretValue {
    fn from(value: String) -> Self {
        SecretValue(value)
    }
}

// Serde passes through to the inner string, so the password key reads and
// writes as a plain TOML string.
impl Serialize for SecretValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SecretValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(SecretValue)
    }
}

impl std::fmt::Display for SecretValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<str> for SecretValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl SecretValue {
    /// True for the empty string, which credential validation treats the
    /// same as an absent password
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Redacting wrapper for the configured MongoDB password
pub type SecretString = Secret<SecretValue>;

/// Wrap an owned string in a [`SecretString`]
///
/// ```rust
/// use cohort::config::secret_string;
/// use secrecy::ExposeSecret;
///
/// let password = secret_string("s3cret".to_string());
/// assert_eq!(password.expose_secret(), "s3cret");
/// ```
#[inline]
pub fn secret_string(value: String) -> SecretString {
    Secret::new(SecretValue::from(value))
}
