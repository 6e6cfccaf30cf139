//! Command-line front end for the URL shortener client.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin urlshort -- shorten https://example.com/very/long/path
//!
//! # Expand a short link
//! cargo run --bin urlshort -- lengthen https://goo.gl/abc
//!
//! # Check whether a URL is a known short link
//! cargo run --bin urlshort -- check https://goo.gl/abc
//! ```
//!
//! # Environment Variables
//!
//! See [`url_shortener_client::config`]. A `.env` file in the working
//! directory is loaded first if present.

use url_shortener_client::config::load_from_env;
use url_shortener_client::prelude::*;
use url_shortener_client::telemetry::init_tracing;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use tokio::sync::oneshot;

/// Shorten URLs and expand short links.
#[derive(Parser)]
#[command(name = "urlshort")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten a long URL through the shortening API
    Shorten {
        /// URL to shorten
        long_url: String,
    },

    /// Resolve a short URL to the URL it redirects to
    Lengthen {
        /// Short URL to resolve
        short_url: String,
    },

    /// Check whether a URL is a known short link
    Check {
        /// URL to check
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = load_from_env().context("Failed to load configuration")?;
    init_tracing(&config.log_level, &config.log_format)?;
    config.print_summary();

    match cli.command {
        Commands::Shorten { long_url } => {
            let client = UrlShortenerClient::new(&config)?;
            let (tx, rx) = oneshot::channel::<Option<String>>();
            client.shorten_url(tx, long_url.clone());

            match rx.await.context("Shorten task ended without a result")? {
                Some(short_url) => println!("{}", short_url.green().bold()),
                None => println!("{} {}", "✗ No short URL for".red(), long_url),
            }
        }
        Commands::Lengthen { short_url } => {
            let client = UrlShortenerClient::new(&config)?;
            let (tx, rx) = oneshot::channel::<Option<String>>();
            client.lengthen_short_url(tx, short_url.clone());

            match rx.await.context("Lengthen task ended without a result")? {
                Some(long_url) if long_url == short_url => {
                    println!("{}", long_url.yellow());
                    println!("{}", "  (no redirect offered)".dimmed());
                }
                Some(long_url) => println!("{}", long_url.green().bold()),
                None => println!("{} {}", "✗ Could not lengthen".red(), short_url),
            }
        }
        Commands::Check { url } => {
            if is_short_url(&url) {
                println!("{} {}", "✓".green(), "known short URL".bold());
            } else {
                println!("{} {}", "✗".red(), "not a known short URL");
            }
        }
    }

    Ok(())
}
