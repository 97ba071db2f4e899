//! API client error types.

use thiserror::Error;

/// Errors returned by [`crate::ApiClient`] calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (DNS, connect, TLS, body read).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status code.
    #[error("server returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The response body did not match the expected shape.
    #[error("deserialization error: {0}")]
    Deserialization(String),
}

/// Result type for API client operations.
pub type ApiResult<T> = Result<T, ApiError>;
