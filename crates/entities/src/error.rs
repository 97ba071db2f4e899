//! Entity error types.

use thiserror::Error;

/// Errors that can occur on entity-level operations.
#[derive(Debug, Error)]
pub enum EntityError {
    /// The story URL could not be parsed.
    #[error("invalid story URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The story URL parsed but carries no host component.
    #[error("story URL has no host")]
    MissingHost,
}
