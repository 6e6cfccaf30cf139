//! Client trait for the remote URL shortening API.

use crate::error::ClientResult;
use async_trait::async_trait;

/// Interface to a remote service that issues short URLs.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpShorteningApi`] - JSON-over-HTTP implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShorteningApi: Send + Sync {
    /// Submits `long_url` and returns the short identifier issued for it.
    ///
    /// Performs exactly one request. No retry is attempted.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ClientError::Transport`] on network failure,
    /// [`crate::error::ClientError::UnexpectedStatus`] on a non-2xx reply, and
    /// [`crate::error::ClientError::EmptyResponse`] or
    /// [`crate::error::ClientError::InvalidResponse`] when no identifier can be
    /// extracted from the body.
    async fn insert(&self, long_url: &str) -> ClientResult<String>;
}
