//! Wire types for the shortening API.

use serde::{Deserialize, Serialize};

/// Body of an insert request.
///
/// # Example
///
/// ```json
/// { "longUrl": "https://example.com/very/long/path" }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertUrlRequest<'a> {
    pub long_url: &'a str,
}

/// Body of an insert response.
///
/// Only `id` is used; other fields are provider-defined and kept for logging.
///
/// # Example
///
/// ```json
/// {
///   "kind": "urlshortener#url",
///   "id": "http://goo.gl/fbsS",
///   "longUrl": "https://example.com/very/long/path"
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertUrlResponse {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub long_url: Option<String>,
}
