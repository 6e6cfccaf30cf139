//! HTTP implementations of the remote client traits.
//!
//! Provides:
//! - [`HttpShorteningApi`] - JSON insert requests against the shortening API
//! - [`HttpRedirectResolver`] - single-hop `Location` lookup

mod dto;
mod redirect_resolver;
mod shortening_api;

pub use dto::{InsertUrlRequest, InsertUrlResponse};
pub use redirect_resolver::HttpRedirectResolver;
pub use shortening_api::HttpShorteningApi;
