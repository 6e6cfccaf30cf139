//! Application layer: orchestrates the remote clients and applies the
//! fail-soft result policy.

pub mod services;
