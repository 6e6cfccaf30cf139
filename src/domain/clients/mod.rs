//! Client trait definitions for the remote collaborators.
//!
//! The adapter talks to exactly two things over the network: the shortening
//! API and whatever host serves a short link. Both are abstracted here so the
//! application layer can be tested without sockets.
//!
//! # Architecture
//!
//! - Traits define the contract for one outbound call each
//! - Implementations live in `crate::infrastructure::http`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod redirect_resolver;
pub mod shortening_api;

pub use redirect_resolver::RedirectResolver;
pub use shortening_api::ShorteningApi;

#[cfg(test)]
pub use redirect_resolver::MockRedirectResolver;
#[cfg(test)]
pub use shortening_api::MockShorteningApi;
