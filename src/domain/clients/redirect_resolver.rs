//! Client trait for reading a single redirect hop.

use crate::error::ClientResult;
use async_trait::async_trait;
use url::Url;

/// Interface for inspecting where a URL redirects to.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpRedirectResolver`] - HTTP implementation with
///   redirect following disabled
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RedirectResolver: Send + Sync {
    /// Requests `short_url` once and returns its `Location` header.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(location))` if the response carries a `Location` header
    /// - `Ok(None)` if it does not, whatever the status code
    ///
    /// Only the immediate hop is inspected; redirect chains are not followed.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ClientError::Transport`] if the request cannot be
    /// completed.
    async fn location(&self, short_url: &Url) -> ClientResult<Option<String>>;
}
