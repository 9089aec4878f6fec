//! Domain Errors
//!
//! Failures of the catalog transport and of favorites persistence.

use thiserror::Error;

/// Catalog request failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The proxy answered with a non-success status
    #[error("API Error: {status} {status_text}")]
    Status { status: u16, status_text: String },

    /// The body did not have any shape the catalog is known to return
    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Malformed(err.to_string())
    }
}

/// Key-value persistence failures. Never leave the favorites layer.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Corrupt favorites entry: {0}")]
    Corrupt(#[from] serde_json::Error),
}
