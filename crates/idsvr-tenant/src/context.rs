//! Request-scoped tenant context.
//!
//! A `TenantContext` is created once per request by the host's tenant
//! middleware and carried in the request's extension map. It is owned by
//! the request that created it and never shared across requests, so no
//! cross-request leakage is possible by construction.

use idsvr_model::Tenant;

/// The tenant a request is scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantContext {
    tenant: Tenant,
}

impl TenantContext {
    /// Creates a context for the given tenant.
    #[must_use]
    pub const fn new(tenant: Tenant) -> Self {
        Self { tenant }
    }

    /// Returns the tenant this request is scoped to.
    #[must_use]
    pub const fn tenant(&self) -> &Tenant {
        &self.tenant
    }

    /// Consumes the context, returning the tenant.
    #[must_use]
    pub fn into_tenant(self) -> Tenant {
        self.tenant
    }
}

impl From<Tenant> for TenantContext {
    fn from(tenant: Tenant) -> Self {
        Self::new(tenant)
    }
}
