//! Infrastructure layer: network implementations of the domain client traits.

pub mod http;
