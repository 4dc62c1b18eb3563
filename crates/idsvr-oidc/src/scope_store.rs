//! Scope catalog store.
//!
//! One scope catalog serves every tenant. It is assembled at process start
//! and immutable afterwards, so the store needs no synchronization.

use async_trait::async_trait;

use idsvr_model::Scope;
use idsvr_model::claim::claim_types;
use idsvr_stores::StoreResult;

/// Read access to the scope catalog.
#[async_trait]
pub trait ScopeStore: Send + Sync {
    /// Finds scope definitions by name.
    ///
    /// Unknown names are skipped, not an error.
    async fn find_scopes_by_name(&self, names: &[String]) -> StoreResult<Vec<Scope>>;

    /// Returns every scope in the catalog.
    async fn all_scopes(&self) -> StoreResult<Vec<Scope>>;
}

/// In-memory scope store over a fixed catalog.
#[derive(Debug, Clone)]
pub struct InMemoryScopeStore {
    scopes: Vec<Scope>,
}

impl InMemoryScopeStore {
    /// Creates a store over the given scopes.
    #[must_use]
    pub const fn new(scopes: Vec<Scope>) -> Self {
        Self { scopes }
    }

    /// Creates a store over the standard scope catalog.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(standard_scopes())
    }
}

impl Default for InMemoryScopeStore {
    fn default() -> Self {
        Self::standard()
    }
}

#[async_trait]
impl ScopeStore for InMemoryScopeStore {
    async fn find_scopes_by_name(&self, names: &[String]) -> StoreResult<Vec<Scope>> {
        let found = self
            .scopes
            .iter()
            .filter(|scope| names.iter().any(|name| *name == scope.name))
            .cloned()
            .collect();
        Ok(found)
    }

    async fn all_scopes(&self) -> StoreResult<Vec<Scope>> {
        Ok(self.scopes.clone())
    }
}

/// OIDC standard claim types bundled by the `profile` scope.
const PROFILE_CLAIM_TYPES: &[&str] = &[
    claim_types::NAME,
    claim_types::FAMILY_NAME,
    claim_types::GIVEN_NAME,
    "middle_name",
    "nickname",
    "preferred_username",
    "profile",
    "picture",
    claim_types::WEBSITE,
    claim_types::GENDER,
    claim_types::BIRTH_DATE,
    "zoneinfo",
    "locale",
    "updated_at",
];

/// Builds the standard scope catalog.
///
/// Five scopes: `openid`, `profile`, `email`, `offline_access`, `roles`.
#[must_use]
pub fn standard_scopes() -> Vec<Scope> {
    vec![
        Scope::identity("openid")
            .with_display_name("Your user identifier")
            .with_claim_type(claim_types::SUBJECT),
        Scope::identity("profile")
            .with_display_name("User profile")
            .with_claim_types(PROFILE_CLAIM_TYPES.iter().copied()),
        Scope::identity("email")
            .with_display_name("Your email address")
            .with_claim_type(claim_types::EMAIL)
            .with_claim_type(claim_types::EMAIL_VERIFIED),
        Scope::resource("offline_access").with_display_name("Offline access"),
        Scope::identity("roles")
            .with_display_name("User roles")
            .with_claim_type(claim_types::ROLE),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use idsvr_model::ScopeKind;

    #[tokio::test]
    async fn catalog_has_exactly_the_five_standard_scopes() {
        let store = InMemoryScopeStore::standard();
        let scopes = store.all_scopes().await.unwrap();

        let names: Vec<&str> = scopes.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["openid", "profile", "email", "offline_access", "roles"]
        );
    }

    #[tokio::test]
    async fn openid_scope_bundles_the_subject_claim() {
        let store = InMemoryScopeStore::standard();
        let scopes = store
            .find_scopes_by_name(&["openid".to_string()])
            .await
            .unwrap();

        assert_eq!(scopes.len(), 1);
        assert_eq!(scopes[0].claim_types, vec!["sub".to_string()]);
        assert_eq!(scopes[0].kind, ScopeKind::Identity);
    }

    #[tokio::test]
    async fn offline_access_is_a_resource_scope() {
        let store = InMemoryScopeStore::standard();
        let scopes = store
            .find_scopes_by_name(&["offline_access".to_string()])
            .await
            .unwrap();

        assert_eq!(scopes[0].kind, ScopeKind::Resource);
        assert!(scopes[0].claim_types.is_empty());
    }

    #[tokio::test]
    async fn unknown_names_are_skipped() {
        let store = InMemoryScopeStore::standard();
        let scopes = store
            .find_scopes_by_name(&["openid".to_string(), "nonexistent".to_string()])
            .await
            .unwrap();

        assert_eq!(scopes.len(), 1);
        assert_eq!(scopes[0].name, "openid");
    }
}
