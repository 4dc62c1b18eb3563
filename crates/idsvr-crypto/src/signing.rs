//! Ephemeral signing credential.
//!
//! The server generates one signing credential at startup and hands it to
//! every tenant's protocol engine instance. The credential does not survive
//! a restart; tokens signed with it become unverifiable when the process
//! exits, which is acceptable for a development-profile server.
//!
//! Signing operations themselves are performed by the protocol engine, not
//! here; this module only owns the key material and its metadata.

use chrono::{DateTime, Utc};

use crate::random::{generate_key_id, random_key_material};

/// Token signature algorithm identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SigningAlgorithm {
    /// RSASSA-PKCS1-v1_5 with SHA-256.
    #[default]
    Rs256,
    /// ECDSA with P-256 and SHA-256.
    Es256,
}

impl SigningAlgorithm {
    /// Returns the JOSE algorithm name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rs256 => "RS256",
            Self::Es256 => "ES256",
        }
    }
}

/// An ephemeral token signing credential.
///
/// ## NIST 800-53 Rev5: SC-12 (Key Management)
///
/// Key material is generated fresh per process and never written to disk.
#[derive(Debug, Clone)]
pub struct SigningCredential {
    key_id: String,
    key_material: String,
    algorithm: SigningAlgorithm,
    created_at: DateTime<Utc>,
}

impl SigningCredential {
    /// Generates a fresh ephemeral credential.
    #[must_use]
    pub fn ephemeral() -> Self {
        Self {
            key_id: generate_key_id(),
            key_material: random_key_material(64),
            algorithm: SigningAlgorithm::default(),
            created_at: Utc::now(),
        }
    }

    /// Returns the key identifier.
    #[must_use]
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// Returns the opaque key material.
    #[must_use]
    pub fn key_material(&self) -> &str {
        &self.key_material
    }

    /// Returns the signature algorithm.
    #[must_use]
    pub const fn algorithm(&self) -> SigningAlgorithm {
        self.algorithm
    }

    /// Returns when the credential was generated.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
