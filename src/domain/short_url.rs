//! Classification of short links by host prefix.

/// Prefixes of short links issued by the supported shortening service.
///
/// Matching is case-sensitive and scheme-sensitive.
pub const KNOWN_SHORT_URL_PREFIXES: [&str; 2] = ["http://goo.gl/", "https://goo.gl/"];

/// Checks whether `url` is a short link issued by a known shortening host.
///
/// This is an allowlist check only: links from any other provider are
/// reported as not short, even if they redirect somewhere.
///
/// # Examples
///
/// ```
/// use url_shortener_client::domain::is_short_url;
///
/// assert!(is_short_url("https://goo.gl/abc"));
/// assert!(!is_short_url("https://example.com/abc"));
/// ```
pub fn is_short_url(url: &str) -> bool {
    KNOWN_SHORT_URL_PREFIXES
        .iter()
        .any(|prefix| url.starts_with(prefix))
}
