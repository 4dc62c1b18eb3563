//! Lazy per-tenant pipeline construction.
//!
//! The server does not know its tenants up front. The first request that
//! addresses a tenant constructs that tenant's provider instance; every
//! later request reuses it. Construction is keyed by tenant name in a
//! concurrent map whose entry API guarantees a single winner when first
//! requests race.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;

use idsvr_crypto::SigningCredential;
use idsvr_oidc::{
    InMemoryPersistedGrantStore, InMemoryScopeStore, PersistedGrantStore, ScopeStore,
    TenantOptions, TenantProvider,
};
use idsvr_stores::{ClientStoreResolver, SeedCatalog, UserDirectoryResolver};
use idsvr_tenant::TenantContext;

/// Builds and caches one [`TenantProvider`] per tenant.
///
/// Client registries and user directories are tenant-specific; the scope
/// store, grant store, and signing credential are created once here and
/// shared by every instance.
pub struct TenantProviders {
    client_resolver: ClientStoreResolver,
    user_directories: UserDirectoryResolver,
    scope_store: Arc<dyn ScopeStore>,
    grant_store: Arc<dyn PersistedGrantStore>,
    signing_credential: Arc<SigningCredential>,
    instances: DashMap<String, Arc<TenantProvider>>,
    mount_prefix: String,
    cookie_lifetime: Duration,
}

impl TenantProviders {
    /// Creates the provider map over a seed catalog.
    ///
    /// `mount_prefix` is the path the tenant pipelines are nested under;
    /// it becomes part of each tenant's issuer path.
    #[must_use]
    pub fn new(
        catalog: Arc<dyn SeedCatalog>,
        mount_prefix: String,
        cookie_lifetime: Duration,
    ) -> Self {
        Self {
            client_resolver: ClientStoreResolver::new(Arc::clone(&catalog)),
            user_directories: UserDirectoryResolver::new(catalog),
            scope_store: Arc::new(InMemoryScopeStore::standard()),
            grant_store: Arc::new(InMemoryPersistedGrantStore::new()),
            signing_credential: Arc::new(SigningCredential::ephemeral()),
            instances: DashMap::new(),
            mount_prefix,
            cookie_lifetime,
        }
    }

    /// Returns the provider for the request's tenant, constructing it on
    /// first use.
    #[must_use]
    pub fn provider_for(&self, context: &TenantContext) -> Arc<TenantProvider> {
        let tenant = context.tenant();

        if let Some(instance) = self.instances.get(tenant.name()) {
            return instance.value().clone();
        }

        let entry = self
            .instances
            .entry(tenant.name().to_string())
            .or_insert_with(|| {
                tracing::info!(tenant = %tenant, "constructing tenant pipeline");
                let options =
                    TenantOptions::new(tenant, &self.mount_prefix, self.cookie_lifetime);
                let directory = self.user_directories.directory_for(context);
                Arc::new(TenantProvider::new(
                    tenant.clone(),
                    options,
                    self.client_resolver.clone(),
                    directory,
                    Arc::clone(&self.scope_store),
                    Arc::clone(&self.grant_store),
                    Arc::clone(&self.signing_credential),
                ))
            });
        entry.value().clone()
    }

    /// Returns how many tenant pipelines have been constructed.
    #[must_use]
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }
}

#[cfg(test)]
mod tests {
    use idsvr_model::Tenant;
    use idsvr_stores::ReferenceCatalog;

    use super::*;

    fn providers() -> TenantProviders {
        TenantProviders::new(
            Arc::new(ReferenceCatalog::new()),
            "/tenants".to_string(),
            Duration::from_secs(36_000),
        )
    }

    fn context(name: &str) -> TenantContext {
        TenantContext::new(Tenant::new(name))
    }

    #[test]
    fn instances_are_constructed_once_per_tenant() {
        let providers = providers();

        let a = providers.provider_for(&context("first"));
        let b = providers.provider_for(&context("first"));
        let other = providers.provider_for(&context("second"));

        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &other));
        assert_eq!(providers.instance_count(), 2);
    }

    #[test]
    fn instances_share_the_signing_credential() {
        let providers = providers();

        let first = providers.provider_for(&context("first"));
        let second = providers.provider_for(&context("second"));

        assert!(Arc::ptr_eq(
            &first.signing_credential(),
            &second.signing_credential()
        ));
        assert!(Arc::ptr_eq(&first.grant_store(), &second.grant_store()));
    }

    #[test]
    fn instance_options_carry_the_mount_prefix() {
        let providers = providers();

        let provider = providers.provider_for(&context("first"));
        assert_eq!(provider.options().issuer_path, "/tenants/first");
        assert_eq!(
            provider.options().authentication_scheme,
            "idsvr.tenants.first"
        );
    }

    #[tokio::test]
    async fn concurrent_first_requests_construct_one_instance() {
        let providers = Arc::new(providers());

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let providers = providers.clone();
                tokio::spawn(async move { providers.provider_for(&context("first")) })
            })
            .collect();

        let mut instances = Vec::new();
        for task in tasks {
            instances.push(task.await.unwrap());
        }

        assert_eq!(providers.instance_count(), 1);
        for instance in &instances[1..] {
            assert!(Arc::ptr_eq(&instances[0], instance));
        }
    }
}
