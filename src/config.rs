//! Client configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the client is built.
//! Library users may also construct [`ClientConfig`] directly.
//!
//! ```bash
//! export SHORTENER_API_URL="https://www.googleapis.com/urlshortener/v1/url"
//! export SHORTENER_API_KEY="..."
//! ```
//!
//! ## Optional Variables
//!
//! - `SHORTENER_API_URL` - Insert endpoint (default: Google URL Shortener v1)
//! - `SHORTENER_API_KEY` - API key sent as the `key` query parameter (default: none)
//! - `SHORTENER_APPLICATION_NAME` - `User-Agent` sent with every request
//!   (default: `url-shortener-client`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use url::Url;

/// Default insert endpoint of the shortening API.
pub const DEFAULT_API_URL: &str = "https://www.googleapis.com/urlshortener/v1/url";

/// Default `User-Agent` product token.
pub const DEFAULT_APPLICATION_NAME: &str = "url-shortener-client";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    /// Sent as the `key` query parameter. Empty values are treated as unset.
    pub api_key: Option<String>,
    pub application_name: String,
    pub log_level: String,
    pub log_format: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            application_name: DEFAULT_APPLICATION_NAME.to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from environment variables.
    ///
    /// Every variable is optional; missing ones fall back to [`ClientConfig::default`].
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let api_url = env::var("SHORTENER_API_URL").unwrap_or(defaults.api_url);
        let api_key = env::var("SHORTENER_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());
        let application_name =
            env::var("SHORTENER_APPLICATION_NAME").unwrap_or(defaults.application_name);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        Ok(Self {
            api_url,
            api_key,
            application_name,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `api_url` is not an absolute `http` or `https` URL
    /// - `application_name` is empty
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        let api_url = Url::parse(&self.api_url)
            .with_context(|| format!("SHORTENER_API_URL is not a valid URL: '{}'", self.api_url))?;

        if api_url.scheme() != "http" && api_url.scheme() != "https" {
            anyhow::bail!(
                "SHORTENER_API_URL must start with 'http://' or 'https://', got '{}'",
                self.api_url
            );
        }

        if self.application_name.trim().is_empty() {
            anyhow::bail!("SHORTENER_APPLICATION_NAME must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without the API key).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Shortening API: {}", self.api_url);
        tracing::info!(
            "  API key: {}",
            self.api_key.as_deref().map(mask_secret).unwrap_or_else(|| "none".to_string())
        );
        tracing::info!("  Application name: {}", self.application_name);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks a secret for logging, keeping at most the first four characters.
///
/// - `AIzaSyD-example` → `AIza***`
/// - `abc` → `***`
fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= 4 {
        return "***".to_string();
    }

    let visible: String = secret.chars().take(4).collect();
    format!("{}***", visible)
}

/// Loads and validates configuration from environment variables.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in the binary).
pub fn load_from_env() -> Result<ClientConfig> {
    let config = ClientConfig::from_env()?;
    config.validate()?;
    Ok(config)
}
