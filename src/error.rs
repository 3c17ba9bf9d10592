//! Custom error types for chain-console
//!
//! This module defines the error hierarchy for the client using thiserror.
//! Every failure that can reach the user is one of these variants, and
//! [`ClientError::user_message`] turns it into the text shown in alerts.

use thiserror::Error;

/// Generic text shown when the backend cannot be reached at all
pub const NETWORK_ERROR_MESSAGE: &str = "Network error: could not reach the backend";

/// The main error type for chain-console operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Transport or connectivity failure (connection refused, DNS, reset)
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Local validation failed before any request was made
    #[error("Validation error: {0}")]
    Validation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl ClientError {
    /// Build a server error from a status code and the backend's message
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// Message suitable for an inline alert
    ///
    /// Server and validation messages are shown verbatim; transport failures
    /// collapse to a generic message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
            Self::Server { message, .. } => message.clone(),
            Self::Validation(message) => message.clone(),
            other => other.to_string(),
        }
    }

    /// Like [`user_message`](Self::user_message), but prefers `fallback`
    /// for anything that did not come with a backend-provided message
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            Self::Server { message, .. } if !message.is_empty() => message.clone(),
            Self::Validation(message) => message.clone(),
            Self::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
            _ => fallback.to_string(),
        }
    }

    /// Check if this is a transport failure
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Json(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Result type alias for chain-console operations
pub type ClientResult<T> = Result<T, ClientError>;
