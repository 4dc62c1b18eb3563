//! # idsvr-stores
//!
//! Tenant-scoped identity stores for the multi-tenant identity server.
//!
//! Every tenant gets its own client registry and user directory. The
//! resolvers in this crate produce tenant-scoped store instances from a
//! request's tenant context:
//!
//! - client registries are rebuilt from the seed catalog on every
//!   resolution, so they always reflect the configured catalog;
//! - user directories are constructed once per tenant and then reused,
//!   so users auto-provisioned from an external login survive for the
//!   process lifetime.
//!
//! Unknown tenant names are not an error; they resolve to empty stores.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod catalog;
pub mod claim_map;
pub mod client_store;
pub mod error;
pub mod provisioning;
pub mod user_directory;

pub use catalog::{ReferenceCatalog, SeedCatalog};
pub use client_store::{ClientStore, ClientStoreResolver, InMemoryClientStore};
pub use error::{StoreError, StoreResult};
pub use user_directory::{InMemoryUserDirectory, UserDirectory, UserDirectoryResolver};
