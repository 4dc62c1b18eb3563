//! Per-tenant client registry.
//!
//! A client registry holds the OAuth clients of exactly one tenant. The
//! resolver rebuilds the registry from the seed catalog on every
//! resolution; registries are cheap, immutable snapshots and are not
//! cached across requests.

use std::sync::Arc;

use async_trait::async_trait;

use idsvr_model::Client;
use idsvr_tenant::TenantContext;

use crate::catalog::{ReferenceCatalog, SeedCatalog};
use crate::error::StoreResult;

/// Read access to a tenant's client registrations.
///
/// Implementations must be thread-safe and support concurrent access.
#[async_trait]
pub trait ClientStore: Send + Sync {
    /// Finds an enabled client by its client ID.
    ///
    /// Disabled clients are invisible through this lookup. Absence is not
    /// an error.
    async fn find_client_by_id(&self, client_id: &str) -> StoreResult<Option<Client>>;
}

/// In-memory client registry over a fixed client list.
#[derive(Debug, Clone)]
pub struct InMemoryClientStore {
    clients: Vec<Client>,
}

impl InMemoryClientStore {
    /// Creates a registry over the given clients.
    #[must_use]
    pub const fn new(clients: Vec<Client>) -> Self {
        Self { clients }
    }

    /// Returns the number of registered clients.
    #[must_use]
    pub fn client_count(&self) -> usize {
        self.clients.len()
    }

    /// Returns whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

#[async_trait]
impl ClientStore for InMemoryClientStore {
    async fn find_client_by_id(&self, client_id: &str) -> StoreResult<Option<Client>> {
        let client = self
            .clients
            .iter()
            .find(|c| c.client_id == client_id && c.enabled)
            .cloned();
        Ok(client)
    }
}

/// Resolves tenant-scoped client registries.
///
/// The resolver itself is tenant-agnostic and shared; scoping happens per
/// call through the request's tenant context.
#[derive(Clone)]
pub struct ClientStoreResolver {
    catalog: Arc<dyn SeedCatalog>,
}

impl ClientStoreResolver {
    /// Creates a resolver over a seed catalog.
    #[must_use]
    pub fn new(catalog: Arc<dyn SeedCatalog>) -> Self {
        Self { catalog }
    }

    /// Builds the client registry for the request's tenant.
    ///
    /// A fresh registry is built on every call. Tenants without catalog
    /// entries get an empty registry, never an error.
    #[must_use]
    pub fn registry_for(&self, context: &TenantContext) -> InMemoryClientStore {
        InMemoryClientStore::new(self.catalog.clients_for(context.tenant()))
    }
}

impl Default for ClientStoreResolver {
    fn default() -> Self {
        Self::new(Arc::new(ReferenceCatalog::new()))
    }
}
