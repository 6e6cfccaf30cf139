//! Error types for the shortening and lengthening paths.
//!
//! These errors never reach callers of the façade: the application layer
//! converts every [`ClientError`] into an absent result after logging it.
//! They exist so the infrastructure layer can propagate failures with `?`.

/// Errors that can occur while talking to the shortening API or a short link host.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Malformed URL: {0}")]
    MalformedUrl(#[from] url::ParseError),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0}")]
    UnexpectedStatus(u16),

    #[error("Invalid response body: {0}")]
    InvalidResponse(String),

    #[error("Empty response body")]
    EmptyResponse,

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
