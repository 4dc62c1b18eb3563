//! Cryptographically secure random identifier generation.
//!
//! This module provides secure random generation for:
//! - Subject identifiers for auto-provisioned users
//! - Signing key identifiers
//! - Ephemeral key material
//!
//! All functions use cryptographically secure random number generators
//! suitable for security-sensitive operations.

use rand::Rng;
use rand::distr::{Alphanumeric, SampleString};

/// Generates a cryptographically secure random byte array.
///
/// Uses the thread-local random number generator which is cryptographically
/// secure by default.
#[must_use]
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut rng = rand::rng();
    let mut bytes = vec![0u8; len];
    rng.fill(&mut bytes[..]);
    bytes
}

/// Generates a cryptographically secure random string.
///
/// The string contains alphanumeric characters (a-z, A-Z, 0-9) and is
/// suitable for subject identifiers and other opaque tokens.
#[must_use]
pub fn random_alphanumeric(len: usize) -> String {
    let mut rng = rand::rng();
    Alphanumeric.sample_string(&mut rng, len)
}

/// Generates a unique subject identifier for an auto-provisioned user.
///
/// # Security
///
/// The identifier has approximately 190 bits of entropy (log2(62^32)),
/// so collisions with seeded or previously provisioned subjects are not
/// a practical concern.
#[must_use]
pub fn generate_subject_id() -> String {
    random_alphanumeric(32)
}

/// Generates an identifier for a signing key.
#[must_use]
pub fn generate_key_id() -> String {
    random_alphanumeric(16)
}

/// Generates URL-safe base64-encoded random key material.
#[must_use]
pub fn random_key_material(byte_len: usize) -> String {
    let bytes = random_bytes(byte_len);
    base64::Engine::encode(&base64::engine::general_purpose::URL_SAFE_NO_PAD, bytes)
}
