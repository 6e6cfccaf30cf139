//! JSON-over-HTTP client for the shortening API.

use super::dto::{InsertUrlRequest, InsertUrlResponse};
use crate::domain::clients::ShorteningApi;
use crate::error::{ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

/// Shortening API client issuing one `POST` per insert.
///
/// The optional API key is sent as the `key` query parameter.
pub struct HttpShorteningApi {
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
}

impl HttpShorteningApi {
    /// Creates a client for the insert endpoint (e.g.
    /// `https://www.googleapis.com/urlshortener/v1/url`).
    pub fn new(client: Client, endpoint: Url, api_key: Option<String>) -> Self {
        Self {
            client,
            endpoint,
            api_key,
        }
    }

    /// Builds the request URL, attaching the API key when configured.
    fn request_url(&self) -> Url {
        let mut url = self.endpoint.clone();
        if let Some(key) = &self.api_key {
            url.query_pairs_mut().append_pair("key", key);
        }
        url
    }
}

#[async_trait]
impl ShorteningApi for HttpShorteningApi {
    async fn insert(&self, long_url: &str) -> ClientResult<String> {
        let response = self
            .client
            .post(self.request_url())
            .json(&InsertUrlRequest { long_url })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(ClientError::EmptyResponse);
        }

        let parsed: Option<InsertUrlResponse> = serde_json::from_slice(&body)
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;
        let parsed = parsed.ok_or(ClientError::EmptyResponse)?;

        debug!(
            "Insert response: kind={:?} longUrl={:?}",
            parsed.kind, parsed.long_url
        );

        match parsed.id {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err(ClientError::EmptyResponse),
        }
    }
}
