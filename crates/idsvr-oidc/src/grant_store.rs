//! Persisted grant store.
//!
//! Persisted grants hold protocol state that outlives a single request:
//! authorization codes, reference tokens, refresh tokens, and consent
//! decisions. One store serves every tenant; grants are keyed by an opaque
//! handle and scoped by subject and client, not by tenant.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use idsvr_stores::StoreResult;

/// A grant persisted by the protocol engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedGrant {
    /// Opaque handle the grant is looked up by.
    pub key: String,
    /// Grant type (e.g. `authorization_code`, `refresh_token`).
    pub grant_type: String,
    /// Subject the grant was issued to.
    pub subject_id: String,
    /// Client the grant was issued for.
    pub client_id: String,
    /// When the grant was created.
    pub creation_time: DateTime<Utc>,
    /// When the grant expires, if it does.
    pub expiration: Option<DateTime<Utc>>,
    /// Serialized grant payload.
    pub data: String,
}

impl PersistedGrant {
    /// Creates a grant with the current creation time and no expiration.
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        grant_type: impl Into<String>,
        subject_id: impl Into<String>,
        client_id: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            grant_type: grant_type.into(),
            subject_id: subject_id.into(),
            client_id: client_id.into(),
            creation_time: Utc::now(),
            expiration: None,
            data: data.into(),
        }
    }

    /// Sets the expiration.
    #[must_use]
    pub const fn with_expiration(mut self, expiration: DateTime<Utc>) -> Self {
        self.expiration = Some(expiration);
        self
    }

    /// Checks whether the grant is expired at the given instant.
    ///
    /// Grants without an expiration never expire.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiration.is_some_and(|expiration| expiration <= now)
    }
}

/// Storage for persisted grants.
///
/// Implementations must be thread-safe and support concurrent access.
#[async_trait]
pub trait PersistedGrantStore: Send + Sync {
    /// Stores a grant, replacing any grant under the same key.
    async fn store(&self, grant: PersistedGrant) -> StoreResult<()>;

    /// Gets a grant by key.
    async fn get(&self, key: &str) -> StoreResult<Option<PersistedGrant>>;

    /// Gets all grants issued to a subject.
    async fn get_all_for_subject(&self, subject_id: &str) -> StoreResult<Vec<PersistedGrant>>;

    /// Removes the grant under a key, if present.
    async fn remove(&self, key: &str) -> StoreResult<()>;

    /// Removes every grant issued to a subject for a client.
    async fn remove_all(&self, subject_id: &str, client_id: &str) -> StoreResult<()>;
}

/// In-memory persisted grant store.
#[derive(Debug, Default)]
pub struct InMemoryPersistedGrantStore {
    grants: RwLock<HashMap<String, PersistedGrant>>,
}

impl InMemoryPersistedGrantStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many grants are currently stored.
    pub async fn grant_count(&self) -> usize {
        self.grants.read().await.len()
    }
}

#[async_trait]
impl PersistedGrantStore for InMemoryPersistedGrantStore {
    async fn store(&self, grant: PersistedGrant) -> StoreResult<()> {
        let mut grants = self.grants.write().await;
        grants.insert(grant.key.clone(), grant);
        Ok(())
    }

    async fn get(&self, key: &str) -> StoreResult<Option<PersistedGrant>> {
        let grants = self.grants.read().await;
        Ok(grants.get(key).cloned())
    }

    async fn get_all_for_subject(&self, subject_id: &str) -> StoreResult<Vec<PersistedGrant>> {
        let grants = self.grants.read().await;
        Ok(grants
            .values()
            .filter(|grant| grant.subject_id == subject_id)
            .cloned()
            .collect())
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        let mut grants = self.grants.write().await;
        grants.remove(key);
        Ok(())
    }

    async fn remove_all(&self, subject_id: &str, client_id: &str) -> StoreResult<()> {
        let mut grants = self.grants.write().await;
        grants.retain(|_, grant| {
            grant.subject_id != subject_id || grant.client_id != client_id
        });
        Ok(())
    }
}
