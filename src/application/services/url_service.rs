//! URL shortening and lengthening service.

use std::sync::Arc;

use crate::domain::clients::{RedirectResolver, ShorteningApi};
use tracing::{debug, error, warn};
use url::Url;

/// Service that shortens long URLs and lengthens short ones.
///
/// Every failure is logged and converted into an absent result. Callers
/// receive `Option<String>` and never an error, so they cannot tell a failed
/// call from one that had no better answer.
pub struct UrlService<A: ShorteningApi, R: RedirectResolver> {
    shortening_api: Arc<A>,
    redirect_resolver: Arc<R>,
}

impl<A: ShorteningApi, R: RedirectResolver> UrlService<A, R> {
    /// Creates a new URL service.
    pub fn new(shortening_api: Arc<A>, redirect_resolver: Arc<R>) -> Self {
        Self {
            shortening_api,
            redirect_resolver,
        }
    }

    /// Shortens `long_url` through the remote API.
    ///
    /// # Returns
    ///
    /// - `Some(short_url)` with the identifier issued by the API
    /// - `None` if `long_url` is empty, or on any transport or response failure
    pub async fn shorten(&self, long_url: &str) -> Option<String> {
        debug!("longUrl: {}", long_url);

        if long_url.is_empty() {
            warn!("Refusing to shorten an empty URL");
            return None;
        }

        let short_url = match self.shortening_api.insert(long_url).await {
            Ok(id) => Some(id),
            Err(e) => {
                error!("Failed to shorten {}: {}", long_url, e);
                None
            }
        };

        debug!("shortUrl: {:?}", short_url);
        short_url
    }

    /// Resolves `short_url` to the URL it redirects to.
    ///
    /// # Returns
    ///
    /// - `Some(location)` if the host answers with a `Location` header
    /// - `Some(short_url)` unchanged if the host answers without one
    /// - `None` if `short_url` is not a valid URL, or the request fails
    ///
    /// A malformed URL yields `None` rather than the input; only a successful
    /// response without `Location` falls back to the input.
    pub async fn lengthen(&self, short_url: &str) -> Option<String> {
        debug!("shortUrl: {}", short_url);

        let url = match Url::parse(short_url) {
            Ok(url) => url,
            Err(e) => {
                warn!("Malformed URL: {} ({})", short_url, e);
                return None;
            }
        };

        let long_url = match self.redirect_resolver.location(&url).await {
            Ok(Some(location)) => Some(location),
            Ok(None) => Some(short_url.to_string()),
            Err(e) => {
                error!("Failed to lengthen {}: {}", short_url, e);
                None
            }
        };

        debug!("longUrl: {:?}", long_url);
        long_url
    }
}
