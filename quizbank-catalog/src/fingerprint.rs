//! Content fingerprinting for question deduplication.

use sha2::{Digest, Sha256};

/// Derive the dedup key for a question text.
///
/// The text is lowercased and every character that is not alphanumeric
/// (whitespace included) is dropped before hashing, so two questions that
/// differ only in case, spacing, or punctuation collide intentionally.
/// SHA-256, lowercase hex. Not a security primitive — collision probability
/// is treated as negligible.
pub fn fingerprint(text: &str) -> String {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect();
    let digest = Sha256::digest(normalized.as_bytes());
    format!("{digest:x}")
}
