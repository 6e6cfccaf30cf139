//! Domain layer: classification rules, completion channels and the
//! contracts for the two remote collaborators.

pub mod clients;
pub mod completion;
pub mod short_url;

pub use completion::{Completion, UrlEvent, lengthened_event, shortened_event};
pub use short_url::{KNOWN_SHORT_URL_PREFIXES, is_short_url};
