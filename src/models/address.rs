//! Account address newtype
//!
//! Addresses are opaque to the client; the backend decides what a valid
//! one looks like. The newtype keeps them from being mixed up with names
//! or hashes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, unique chain identifier of an account
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Wrap a raw address string
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Get the raw address
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shorten the address for narrow columns
    ///
    /// Keeps the first `start` and last `end` characters around an ellipsis.
    /// Addresses too short to benefit are returned unchanged.
    pub fn truncated(&self, start: usize, end: usize) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= start + end + 3 {
            return self.0.clone();
        }
        let head: String = chars[..start].iter().collect();
        let tail: String = chars[chars.len() - end..].iter().collect();
        format!("{}...{}", head, tail)
    }

    /// The default short form used in tables (8 leading, 6 trailing)
    pub fn short(&self) -> String {
        self.truncated(8, 6)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Address {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
