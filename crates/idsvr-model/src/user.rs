//! User domain model.
//!
//! Users are the identity entities of a tenant's directory. They carry a
//! stable subject identifier, credentials for local login, and an ordered
//! claim list. Users provisioned from an external identity provider keep a
//! link to the provider they came from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::claim::{Claim, claim_types};

/// Link to an external identity provider account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalIdentity {
    /// Identity provider name (e.g. "google", "aad").
    pub provider: String,
    /// User identifier at the provider.
    pub provider_user_id: String,
}

impl ExternalIdentity {
    /// Creates a new external identity link.
    #[must_use]
    pub fn new(provider: impl Into<String>, provider_user_id: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            provider_user_id: provider_user_id.into(),
        }
    }
}

/// A user in a tenant's directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Opaque unique subject identifier.
    pub subject: String,
    /// Username used for local login.
    pub username: String,
    /// Password for local login.
    ///
    /// ## NIST 800-53 Rev5: IA-5 (Authenticator Management)
    ///
    /// Stored in plain text as an in-memory test fixture only. A durable
    /// directory backend must hash passwords before storing them.
    pub password: Option<String>,
    /// Whether the account is enabled.
    pub enabled: bool,
    /// Link to the external provider this user was provisioned from.
    pub external_identity: Option<ExternalIdentity>,
    /// Claims about the user, in insertion order.
    pub claims: Vec<Claim>,
    /// When the user record was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new enabled user with the given subject and username.
    #[must_use]
    pub fn new(subject: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            username: username.into(),
            password: None,
            enabled: true,
            external_identity: None,
            claims: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Sets the password.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Sets whether the user is enabled.
    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Links the user to an external identity provider account.
    #[must_use]
    pub fn with_external_identity(mut self, identity: ExternalIdentity) -> Self {
        self.external_identity = Some(identity);
        self
    }

    /// Adds a claim.
    #[must_use]
    pub fn with_claim(mut self, claim: Claim) -> Self {
        self.claims.push(claim);
        self
    }

    /// Adds several claims, preserving their order.
    #[must_use]
    pub fn with_claims<I>(mut self, claims: I) -> Self
    where
        I: IntoIterator<Item = Claim>,
    {
        self.claims.extend(claims);
        self
    }

    /// Checks the username against this user, ignoring case.
    #[must_use]
    pub fn matches_username(&self, username: &str) -> bool {
        self.username.eq_ignore_ascii_case(username)
    }

    /// Finds the first claim of the given type.
    #[must_use]
    pub fn find_claim(&self, claim_type: &str) -> Option<&Claim> {
        self.claims.iter().find(|c| c.claim_type == claim_type)
    }

    /// Gets the value of the first claim of the given type.
    #[must_use]
    pub fn claim_value(&self, claim_type: &str) -> Option<&str> {
        self.find_claim(claim_type).map(|c| c.value.as_str())
    }

    /// Gets the user's display name claim, if present.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.claim_value(claim_types::NAME)
    }

    /// Checks whether this user came from an external provider.
    #[must_use]
    pub const fn is_external(&self) -> bool {
        self.external_identity.is_some()
    }
}
