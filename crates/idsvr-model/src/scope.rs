//! Scope domain model.
//!
//! Scopes group claim types a client may request. The scope catalog is
//! shared by all tenants and immutable after process start.

use serde::{Deserialize, Serialize};

/// Kind of a scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeKind {
    /// Identity scope: maps to claims about the user in the identity token.
    #[default]
    Identity,
    /// Resource scope: guards access to an API resource.
    Resource,
}

/// A scope definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    /// Scope name as requested by clients (e.g. `openid`).
    pub name: String,
    /// Human-readable display name.
    pub display_name: Option<String>,
    /// Scope kind.
    pub kind: ScopeKind,
    /// Claim types this scope bundles.
    pub claim_types: Vec<String>,
}

impl Scope {
    /// Creates an identity scope.
    #[must_use]
    pub fn identity(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            kind: ScopeKind::Identity,
            claim_types: Vec::new(),
        }
    }

    /// Creates a resource scope.
    #[must_use]
    pub fn resource(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            kind: ScopeKind::Resource,
            claim_types: Vec::new(),
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Adds a bundled claim type.
    #[must_use]
    pub fn with_claim_type(mut self, claim_type: impl Into<String>) -> Self {
        self.claim_types.push(claim_type.into());
        self
    }

    /// Adds several bundled claim types.
    #[must_use]
    pub fn with_claim_types<I, S>(mut self, claim_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.claim_types
            .extend(claim_types.into_iter().map(Into::into));
        self
    }
}
