//! core type-safe wrappers for the store vocabulary.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The payload type stored under a key.
///
/// Values are arbitrary JSON documents; "not found" is always expressed as
/// `Option<Value>::None`, never as a sentinel value such as `Value::Null`
/// (a caller may legitimately store a null).
pub type Value = serde_json::Value;

/// A validated store key.
///
/// Memcached imposes hard constraints on keys; validating them at
/// construction time means every other layer can assume a `Key` is safe to
/// put on the wire.
///
/// Valid keys:
/// - 1-250 bytes
/// - No whitespace
/// - No control characters
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Key(String);

impl Key {
    /// Maximum key length in bytes, per the memcached protocol.
    pub const MAX_LEN: usize = 250;

    /// create a new Key, validating the input
    pub fn new(key: impl Into<String>) -> Result<Self, InvalidKeyError> {
        let key = key.into();
        Self::validate(&key)?;
        Ok(Self(key))
    }

    fn validate(key: &str) -> Result<(), InvalidKeyError> {
        if key.is_empty() {
            return Err(InvalidKeyError::Empty);
        }

        if key.len() > Self::MAX_LEN {
            return Err(InvalidKeyError::TooLong(key.len()));
        }

        for c in key.chars() {
            if c.is_whitespace() || c.is_control() {
                return Err(InvalidKeyError::InvalidChar(c));
            }
        }

        Ok(())
    }

    /// the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Why a key failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidKeyError {
    /// key is empty
    #[error("key cannot be empty")]
    Empty,

    /// key exceeds the protocol limit
    #[error("key is {0} bytes, maximum is {max}", max = Key::MAX_LEN)]
    TooLong(usize),

    /// key contains whitespace or a control character
    #[error("key contains invalid character: {0:?}")]
    InvalidChar(char),
}

/// A time-to-live in seconds.
///
/// `Ttl::ZERO` (the default) means "no expiry" in memcached terms. There is
/// no absent case: where the wire protocol treats a missing expiry as zero,
/// callers here pass `Ttl::ZERO` explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Ttl(u32);

impl Ttl {
    /// No expiry.
    pub const ZERO: Ttl = Ttl(0);

    /// TTL of `secs` seconds.
    pub const fn seconds(secs: u32) -> Self {
        Self(secs)
    }

    /// the raw number of seconds
    pub const fn as_secs(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Ttl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_keys() {
        assert!(Key::new("user:1").is_ok());
        assert!(Key::new("a").is_ok());
        assert!(Key::new("x".repeat(250)).is_ok());
        assert!(Key::new("weird-but-legal!\"#$%&'()").is_ok());
    }

    #[test]
    fn test_invalid_keys() {
        assert_eq!(Key::new(""), Err(InvalidKeyError::Empty));
        assert_eq!(Key::new("x".repeat(251)), Err(InvalidKeyError::TooLong(251)));
        assert_eq!(Key::new("has space"), Err(InvalidKeyError::InvalidChar(' ')));
        assert_eq!(Key::new("has\nnewline"), Err(InvalidKeyError::InvalidChar('\n')));
        assert_eq!(Key::new("has\ttab"), Err(InvalidKeyError::InvalidChar('\t')));
    }

    #[test]
    fn test_key_display_roundtrip() {
        let key = Key::new("session:abc123").unwrap();
        assert_eq!(key.to_string(), "session:abc123");
        assert_eq!(key.as_str(), "session:abc123");
    }

    #[test]
    fn test_ttl_default_is_no_expiry() {
        assert_eq!(Ttl::default(), Ttl::ZERO);
        assert_eq!(Ttl::ZERO.as_secs(), 0);
        assert_eq!(Ttl::seconds(60).as_secs(), 60);
        assert_eq!(Ttl::seconds(60).to_string(), "60");
    }
}
