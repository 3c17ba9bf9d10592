//! Account model
//!
//! An account is an address, an optional user label, and (only in the
//! create-account response) the private key generated by the backend.

use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::address::Address;

/// Private key returned once by the backend on account creation
///
/// The contents are wiped on drop and never appear in `Debug` output, so
/// the key cannot leak into logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(transparent)]
pub struct PrivateKey(String);

impl PrivateKey {
    /// Wrap a key string
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Expose the key for the one-time display
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

/// A chain identity as reported by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique, opaque chain identifier
    pub address: Address,

    /// Optional user label
    #[serde(default)]
    pub name: Option<String>,

    /// Present only in the create-account response
    #[serde(
        default,
        rename = "privateKey",
        skip_serializing_if = "Option::is_none"
    )]
    pub private_key: Option<PrivateKey>,
}

impl Account {
    /// Create an account without a private key
    pub fn new(address: impl Into<Address>, name: Option<String>) -> Self {
        Self {
            address: address.into(),
            name,
            private_key: None,
        }
    }

    /// The label if set and non-blank
    pub fn label(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Label for option lists: the name, or the address when unnamed
    pub fn display_name(&self) -> &str {
        self.label().unwrap_or_else(|| self.address.as_str())
    }

    /// Drop any private key the backend included
    ///
    /// Listing and lookup responses are passed through this so that a key is
    /// only ever held for the create-account result.
    pub fn without_private_key(mut self) -> Self {
        self.private_key = None;
        self
    }
}
