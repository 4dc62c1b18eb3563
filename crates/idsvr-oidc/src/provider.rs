//! Per-tenant engine instance.
//!
//! A [`TenantProvider`] bundles everything one tenant's protocol engine
//! needs: its options, its client registry resolver, its user directory,
//! and the scope store, grant store, and signing credential shared with
//! every other tenant. Instances are built lazily the first time a tenant
//! is addressed and reused for the lifetime of the process.

use std::sync::Arc;

use idsvr_core::{Error, Result};
use idsvr_crypto::SigningCredential;
use idsvr_model::Tenant;
use idsvr_stores::{ClientStoreResolver, InMemoryClientStore, UserDirectory};
use idsvr_tenant::TenantContext;

use crate::grant_store::PersistedGrantStore;
use crate::options::TenantOptions;
use crate::scope_store::ScopeStore;

/// One tenant's engine instance.
///
/// Client and user stores are tenant-specific; the scope store, grant
/// store, and signing credential are shared process-wide.
pub struct TenantProvider {
    tenant: Tenant,
    options: TenantOptions,
    client_resolver: ClientStoreResolver,
    user_directory: Arc<dyn UserDirectory>,
    scope_store: Arc<dyn ScopeStore>,
    grant_store: Arc<dyn PersistedGrantStore>,
    signing_credential: Arc<SigningCredential>,
}

impl TenantProvider {
    /// Creates an instance for one tenant.
    #[must_use]
    pub fn new(
        tenant: Tenant,
        options: TenantOptions,
        client_resolver: ClientStoreResolver,
        user_directory: Arc<dyn UserDirectory>,
        scope_store: Arc<dyn ScopeStore>,
        grant_store: Arc<dyn PersistedGrantStore>,
        signing_credential: Arc<SigningCredential>,
    ) -> Self {
        Self {
            tenant,
            options,
            client_resolver,
            user_directory,
            scope_store,
            grant_store,
            signing_credential,
        }
    }

    /// The tenant this instance serves.
    #[must_use]
    pub const fn tenant(&self) -> &Tenant {
        &self.tenant
    }

    /// This instance's options.
    #[must_use]
    pub const fn options(&self) -> &TenantOptions {
        &self.options
    }

    /// Rejects requests carrying a context for a different tenant.
    ///
    /// An instance must only ever see its own tenant's requests. A
    /// mismatch means the server wired a request to the wrong instance,
    /// which is a server fault, not a client one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the context names another tenant.
    pub fn ensure_tenant(&self, context: &TenantContext) -> Result<()> {
        if context.tenant() == &self.tenant {
            Ok(())
        } else {
            tracing::warn!(
                instance = %self.tenant,
                context = %context.tenant(),
                "engine instance received a foreign tenant context"
            );
            Err(Error::Config(format!(
                "tenant provider for '{}' received a request for '{}'",
                self.tenant,
                context.tenant()
            )))
        }
    }

    /// Builds the client registry for the request's tenant.
    ///
    /// The registry is rebuilt from the seed catalog on every resolution.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the context names another tenant.
    pub fn client_registry(&self, context: &TenantContext) -> Result<InMemoryClientStore> {
        self.ensure_tenant(context)?;
        Ok(self.client_resolver.registry_for(context))
    }

    /// The user directory for the request's tenant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the context names another tenant.
    pub fn user_directory(&self, context: &TenantContext) -> Result<Arc<dyn UserDirectory>> {
        self.ensure_tenant(context)?;
        Ok(Arc::clone(&self.user_directory))
    }

    /// The scope store shared across tenants.
    #[must_use]
    pub fn scope_store(&self) -> Arc<dyn ScopeStore> {
        Arc::clone(&self.scope_store)
    }

    /// The persisted grant store shared across tenants.
    #[must_use]
    pub fn grant_store(&self) -> Arc<dyn PersistedGrantStore> {
        Arc::clone(&self.grant_store)
    }

    /// The token signing credential shared across tenants.
    #[must_use]
    pub fn signing_credential(&self) -> Arc<SigningCredential> {
        Arc::clone(&self.signing_credential)
    }
}
