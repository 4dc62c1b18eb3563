//! Per-tenant user directory.
//!
//! A user directory holds the users of exactly one tenant. Unlike client
//! registries, directories are constructed once per tenant and then
//! reused, so users appended by auto-provisioning remain visible for the
//! process lifetime.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::RwLock;

use idsvr_model::{Claim, User};
use idsvr_tenant::TenantContext;

use crate::catalog::{ReferenceCatalog, SeedCatalog};
use crate::error::StoreResult;
use crate::provisioning::provision_user;

/// A tenant's user directory.
///
/// Implementations must be thread-safe and support concurrent access.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Validates a username/password pair.
    ///
    /// Username comparison ignores case; the password must match exactly.
    /// A mismatch is a normal negative outcome, not an error.
    ///
    /// ## NIST 800-53 Rev5: IA-6 (Authentication Feedback)
    ///
    /// The result does not reveal whether the username or the password was
    /// wrong.
    async fn validate_credentials(&self, username: &str, password: &str) -> StoreResult<bool>;

    /// Finds a user by username, ignoring case.
    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>>;

    /// Finds a user by external provider link.
    async fn find_by_external_provider(
        &self,
        provider: &str,
        provider_user_id: &str,
    ) -> StoreResult<Option<User>>;

    /// Provisions a user from external-provider claims and appends it to
    /// the directory.
    ///
    /// The created user is visible to later lookups for the process
    /// lifetime.
    async fn auto_provision(
        &self,
        provider: &str,
        provider_user_id: &str,
        claims: &[Claim],
    ) -> StoreResult<User>;
}

/// In-memory user directory backed by a synchronized user list.
pub struct InMemoryUserDirectory {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserDirectory {
    /// Creates a directory seeded with the given users.
    #[must_use]
    pub fn new(seed_users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(seed_users),
        }
    }

    /// Returns the number of users currently in the directory.
    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn validate_credentials(&self, username: &str, password: &str) -> StoreResult<bool> {
        let users = self.users.read().await;
        let valid = users
            .iter()
            .find(|u| u.matches_username(username))
            .is_some_and(|user| user.password.as_deref() == Some(password));
        Ok(valid)
    }

    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.matches_username(username)).cloned())
    }

    async fn find_by_external_provider(
        &self,
        provider: &str,
        provider_user_id: &str,
    ) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        let user = users
            .iter()
            .find(|u| {
                u.external_identity
                    .as_ref()
                    .is_some_and(|id| id.provider == provider && id.provider_user_id == provider_user_id)
            })
            .cloned();
        Ok(user)
    }

    async fn auto_provision(
        &self,
        provider: &str,
        provider_user_id: &str,
        claims: &[Claim],
    ) -> StoreResult<User> {
        let user = provision_user(provider, provider_user_id, claims);

        let mut users = self.users.write().await;
        users.push(user.clone());

        tracing::info!(
            provider = %provider,
            subject = %user.subject,
            "auto-provisioned user from external provider"
        );
        Ok(user)
    }
}

/// Resolves the once-per-tenant user directory.
///
/// The first resolution for a tenant constructs its directory from the
/// seed catalog; every later resolution returns the same instance. Under
/// concurrent first requests exactly one construction wins.
pub struct UserDirectoryResolver {
    catalog: Arc<dyn SeedCatalog>,
    directories: DashMap<String, Arc<InMemoryUserDirectory>>,
}

impl UserDirectoryResolver {
    /// Creates a resolver over a seed catalog.
    #[must_use]
    pub fn new(catalog: Arc<dyn SeedCatalog>) -> Self {
        Self {
            catalog,
            directories: DashMap::new(),
        }
    }

    /// Returns the directory for the request's tenant, constructing it on
    /// first use.
    #[must_use]
    pub fn directory_for(&self, context: &TenantContext) -> Arc<InMemoryUserDirectory> {
        let tenant = context.tenant();

        if let Some(directory) = self.directories.get(tenant.name()) {
            return directory.value().clone();
        }

        let entry = self
            .directories
            .entry(tenant.name().to_string())
            .or_insert_with(|| {
                tracing::debug!(tenant = %tenant, "constructing user directory");
                Arc::new(InMemoryUserDirectory::new(
                    self.catalog.seed_users_for(tenant),
                ))
            });
        entry.value().clone()
    }

    /// Returns how many tenant directories have been constructed.
    #[must_use]
    pub fn directory_count(&self) -> usize {
        self.directories.len()
    }
}

impl Default for UserDirectoryResolver {
    fn default() -> Self {
        Self::new(Arc::new(ReferenceCatalog::new()))
    }
}
