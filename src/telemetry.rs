//! Logging setup.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Builds the log filter from a level or directive string
/// (e.g. `info` or `info,url_shortener_client=debug`).
pub fn build_filter(log_level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(log_level).with_context(|| format!("Invalid log filter '{}'", log_level))
}

/// Installs the global `tracing` subscriber.
///
/// `log_format` selects `json` output; any other value selects plain text.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a global subscriber is
/// already installed.
pub fn init_tracing(log_level: &str, log_format: &str) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(build_filter(log_level)?);

    let installed = match log_format {
        "json" => builder.json().try_init(),
        _ => builder.try_init(),
    };

    installed.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}
