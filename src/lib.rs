//! # URL Shortener Client
//!
//! An asynchronous client that shortens URLs through a remote shortening API
//! and expands short links by reading their redirect target.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Short link classification, completion channels
//!   and the remote client traits
//! - **Application Layer** ([`application`]) - Fail-soft orchestration of the two operations
//! - **Infrastructure Layer** ([`infrastructure`]) - `reqwest` implementations of the
//!   remote clients
//! - **Façade** ([`client`]) - Non-blocking entry points that run each operation on
//!   a background task
//!
//! ## Result Policy
//!
//! No operation ever returns an error to its caller. Failures are logged and
//! reported as `None`. Lengthening a URL whose host answers without a
//! `Location` header yields the input unchanged.
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::ClientConfig`].
//! See [`config`] module for available options.

pub mod application;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod telemetry;

pub use client::UrlShortenerClient;
pub use error::{ClientError, ClientResult};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::UrlService;
    pub use crate::client::UrlShortenerClient;
    pub use crate::config::ClientConfig;
    pub use crate::domain::{
        Completion, UrlEvent, is_short_url, lengthened_event, shortened_event,
    };
    pub use crate::error::{ClientError, ClientResult};
}
