//! # idsvr-oidc
//!
//! The boundary between the multi-tenant host and the OIDC protocol
//! engine.
//!
//! The protocol state machine itself (authorize/token endpoints, token
//! signing) is an external collaborator; this crate defines what every
//! tenant's engine instance is wired with:
//!
//! - the shared scope catalog and persisted-grant store,
//! - the shared ephemeral signing credential,
//! - per-tenant options (scheme name, cookie settings, issuer path),
//! - the [`TenantProvider`] bundle handed to the engine.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod grant_store;
pub mod options;
pub mod provider;
pub mod scope_store;

pub use grant_store::{InMemoryPersistedGrantStore, PersistedGrant, PersistedGrantStore};
pub use options::{DEFAULT_COOKIE_LIFETIME, TenantOptions};
pub use provider::TenantProvider;
pub use scope_store::{InMemoryScopeStore, ScopeStore, standard_scopes};
