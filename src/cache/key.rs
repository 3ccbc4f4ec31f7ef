//! Cache key derivation.

use sha2::{Digest, Sha256};

/// Derive the cache fingerprint for an input text.
///
/// SHA-256 over the exact byte content, rendered as lowercase hex. No
/// normalization: whitespace and ordering differences produce distinct
/// fingerprints. Pure and deterministic, so equal inputs always map to
/// the same cache slot.
pub fn fingerprint(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hasher.finalize().iter().map(|b| format!("{:02x}", b)).collect()
}
