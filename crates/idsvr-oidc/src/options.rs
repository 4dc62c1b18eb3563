//! Per-tenant engine options.
//!
//! Every tenant's engine instance carries its own options: the cookie
//! authentication scheme named after the tenant, the session cookie the
//! scheme writes, and the path the instance is issued under.

use std::time::Duration;

use idsvr_model::Tenant;
use idsvr_tenant::scheme_name;

/// Default session cookie lifetime (10 hours).
pub const DEFAULT_COOKIE_LIFETIME: Duration = Duration::from_secs(36_000);

/// Options for one tenant's engine instance.
#[derive(Debug, Clone)]
pub struct TenantOptions {
    /// Authentication scheme name, unique per tenant.
    pub authentication_scheme: String,
    /// Session cookie name. Same as the scheme name.
    pub cookie_name: String,
    /// Path this tenant's instance is issued under (mount prefix + name).
    pub issuer_path: String,
    /// Absolute session cookie lifetime.
    pub cookie_lifetime: Duration,
    /// Whether the cookie lifetime slides on activity. Always `false`:
    /// sessions expire a fixed interval after sign-in.
    pub sliding_expiration: bool,
}

impl TenantOptions {
    /// Builds the options for a tenant mounted under the given prefix.
    #[must_use]
    pub fn new(tenant: &Tenant, mount_prefix: &str, cookie_lifetime: Duration) -> Self {
        let authentication_scheme = scheme_name(tenant);
        Self {
            cookie_name: authentication_scheme.clone(),
            authentication_scheme,
            issuer_path: format!("{mount_prefix}/{tenant}"),
            cookie_lifetime,
            sliding_expiration: false,
        }
    }

    /// Returns the cookie lifetime in whole seconds, as used in `Max-Age`.
    #[must_use]
    pub const fn cookie_max_age_secs(&self) -> u64 {
        self.cookie_lifetime.as_secs()
    }
}
