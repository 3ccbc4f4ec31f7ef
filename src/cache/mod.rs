//! Result caching.
//!
//! Identical review texts map to the same fingerprint, so a repeated
//! submission inside the expiry window is served from memory without
//! touching the classifier.

mod key;
mod store;

pub use key::fingerprint;
pub use store::{CacheStats, ResultCache};
