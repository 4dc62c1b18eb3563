//! Secret hashing.
//!
//! Client secrets are stored as base64-encoded SHA-256 digests of the
//! plain-text secret. Verification re-hashes the presented secret and
//! compares digests in constant time.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use sha2::{Digest, Sha256};

/// Computes the base64-encoded SHA-256 digest of the input.
///
/// This is the stored form of a client secret.
#[must_use]
pub fn sha256_base64(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    STANDARD.encode(digest)
}

/// Checks a plain-text secret against a stored hash.
///
/// The comparison runs over the full digest regardless of where the first
/// mismatch occurs.
#[must_use]
pub fn secret_matches(candidate: &str, stored_hash: &str) -> bool {
    let candidate_hash = sha256_base64(candidate);
    if candidate_hash.len() != stored_hash.len() {
        return false;
    }

    let mut diff = 0u8;
    for (a, b) in candidate_hash.bytes().zip(stored_hash.bytes()) {
        diff |= a ^ b;
    }
    diff == 0
}
