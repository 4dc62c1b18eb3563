//! # idsvr-crypto
//!
//! Cryptographic support for the identity server:
//! - random subject and key identifiers,
//! - client secret hashing (SHA-256, base64),
//! - the ephemeral signing credential shared by all tenant instances.
//!
//! ## NIST 800-53 Rev5 Controls
//!
//! - SC-12: Cryptographic key management
//! - SC-13: Cryptographic protection

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod hash;
pub mod random;
pub mod signing;

pub use hash::{secret_matches, sha256_base64};
pub use random::{generate_key_id, generate_subject_id, random_alphanumeric};
pub use signing::{SigningAlgorithm, SigningCredential};
