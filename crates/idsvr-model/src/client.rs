//! Client domain model.
//!
//! Clients represent applications that can request authentication and
//! authorization from the identity server (OAuth 2.0 / OIDC clients).
//! Every client belongs to exactly one tenant and is reachable only
//! through that tenant's registry.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// OAuth 2.0 grant type a client is allowed to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
    /// Authorization Code flow.
    AuthorizationCode,
    /// Implicit flow (not recommended).
    Implicit,
    /// Client Credentials flow.
    ClientCredentials,
    /// Resource Owner Password flow.
    ResourceOwnerPassword,
}

/// An OAuth 2.0 / OIDC client application.
///
/// Client identifiers are unique within a tenant; the same identifier may
/// exist under different tenants without conflict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    /// Unique client identifier (OAuth `client_id`) within the tenant.
    pub client_id: String,
    /// Display name.
    pub name: Option<String>,
    /// Whether the client is enabled.
    pub enabled: bool,
    /// Hashed client secrets (SHA-256, base64 encoded).
    pub secrets: Vec<String>,
    /// Allowed grant types.
    pub grant_types: HashSet<GrantType>,
    /// Allowed redirect URIs, in registration order.
    pub redirect_uris: Vec<String>,
    /// Names of scopes the client may request.
    pub allowed_scopes: HashSet<String>,
    /// Require user consent for scopes.
    pub consent_required: bool,
}

impl Client {
    /// Creates a new client with the given client ID.
    #[must_use]
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            name: None,
            enabled: true,
            secrets: Vec::new(),
            grant_types: HashSet::new(),
            redirect_uris: Vec::new(),
            allowed_scopes: HashSet::new(),
            consent_required: false,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds a hashed secret.
    #[must_use]
    pub fn with_secret(mut self, hashed_secret: impl Into<String>) -> Self {
        self.secrets.push(hashed_secret.into());
        self
    }

    /// Allows a grant type.
    #[must_use]
    pub fn with_grant_type(mut self, grant_type: GrantType) -> Self {
        self.grant_types.insert(grant_type);
        self
    }

    /// Adds a redirect URI.
    #[must_use]
    pub fn with_redirect_uri(mut self, uri: impl Into<String>) -> Self {
        self.redirect_uris.push(uri.into());
        self
    }

    /// Allows a scope by name.
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.allowed_scopes.insert(scope.into());
        self
    }

    /// Sets whether user consent is required.
    #[must_use]
    pub const fn with_consent_required(mut self, required: bool) -> Self {
        self.consent_required = required;
        self
    }

    /// Checks whether the client may use the given grant type.
    #[must_use]
    pub fn allows_grant_type(&self, grant_type: GrantType) -> bool {
        self.grant_types.contains(&grant_type)
    }

    /// Checks if the redirect URI is valid for this client.
    #[must_use]
    pub fn is_valid_redirect_uri(&self, uri: &str) -> bool {
        // Exact match
        if self.redirect_uris.iter().any(|u| u == uri) {
            return true;
        }

        // Wildcard match (ends with /*)
        for pattern in &self.redirect_uris {
            if let Some(prefix) = pattern.strip_suffix("/*")
                && uri.starts_with(prefix)
            {
                return true;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_client_has_defaults() {
        let client = Client::new("my-app");

        assert_eq!(client.client_id, "my-app");
        assert!(client.enabled);
        assert!(!client.consent_required);
        assert!(client.secrets.is_empty());
    }

    #[test]
    fn builder_pattern_works() {
        let client = Client::new("web-app")
            .with_name("Web Application")
            .with_grant_type(GrantType::AuthorizationCode)
            .with_redirect_uri("http://localhost:5000/signin-oidc")
            .with_scope("openid")
            .with_scope("profile");

        assert_eq!(client.name, Some("Web Application".to_string()));
        assert!(client.allows_grant_type(GrantType::AuthorizationCode));
        assert!(!client.allows_grant_type(GrantType::Implicit));
        assert!(client.allowed_scopes.contains("openid"));
    }

    #[test]
    fn redirect_uris_preserve_order() {
        let client = Client::new("app")
            .with_redirect_uri("https://example.com/first")
            .with_redirect_uri("https://example.com/second");

        assert_eq!(
            client.redirect_uris,
            vec![
                "https://example.com/first".to_string(),
                "https://example.com/second".to_string(),
            ]
        );
    }

    #[test]
    fn redirect_uri_validation() {
        let client = Client::new("app")
            .with_redirect_uri("https://example.com/callback")
            .with_redirect_uri("https://example.com/app/*");

        assert!(client.is_valid_redirect_uri("https://example.com/callback"));
        assert!(client.is_valid_redirect_uri("https://example.com/app/page"));
        assert!(!client.is_valid_redirect_uri("https://evil.com/callback"));
    }
}
