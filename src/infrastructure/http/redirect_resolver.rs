//! Single-hop redirect inspection over HTTP.

use crate::domain::clients::RedirectResolver;
use crate::error::ClientResult;
use async_trait::async_trait;
use reqwest::{Client, header::LOCATION, redirect::Policy};
use tracing::debug;
use url::Url;

/// Resolves a short link by reading the `Location` header of its first response.
///
/// The wrapped client must not follow redirects; [`HttpRedirectResolver::client_builder`]
/// returns a builder configured accordingly.
pub struct HttpRedirectResolver {
    client: Client,
}

impl HttpRedirectResolver {
    /// Wraps a client that has redirect following disabled.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns a client builder with redirect following disabled.
    pub fn client_builder() -> reqwest::ClientBuilder {
        Client::builder().redirect(Policy::none())
    }
}

#[async_trait]
impl RedirectResolver for HttpRedirectResolver {
    async fn location(&self, short_url: &Url) -> ClientResult<Option<String>> {
        let response = self.client.get(short_url.clone()).send().await?;

        debug!("{} responded with {}", short_url, response.status());

        // Header names are case-insensitive; the value is returned verbatim.
        let location = response
            .headers()
            .get(LOCATION)
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());

        Ok(location)
    }
}
