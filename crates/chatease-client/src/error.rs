//! Error types for the ChatEase client.

use chatease_core::ValidationError;
use thiserror::Error;

/// Errors that can occur when constructing or using [`crate::ChatEaseClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// Unusable configuration, detected at construction time.
    #[error("ChatEaseClient: {0}")]
    Config(String),

    /// Local parameter validation failed; no request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The HTTP call itself failed to complete.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Api {
        /// Numeric HTTP status code.
        status: u16,
        /// Full error line, including status text and any readable body.
        message: String,
    },

    /// JSON serialization/deserialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
