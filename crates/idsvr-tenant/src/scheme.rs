//! Per-tenant authentication scheme naming.
//!
//! Each tenant's authorization server instance registers its own cookie
//! authentication scheme. The scheme name is derived from the tenant name
//! under a fixed namespace prefix, so distinct tenants always get distinct
//! schemes, and the name doubles as the tenant's session cookie name.

use idsvr_model::Tenant;

/// Namespace prefix for tenant authentication schemes.
pub const SCHEME_PREFIX: &str = "idsvr.tenants.";

/// Returns the authentication scheme name for a tenant.
///
/// Injective over tenant names: two tenants share a scheme name only if
/// they share a (normalized) tenant name.
#[must_use]
pub fn scheme_name(tenant: &Tenant) -> String {
    format!("{SCHEME_PREFIX}{tenant}")
}
