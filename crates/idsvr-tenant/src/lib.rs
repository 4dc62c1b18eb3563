//! # idsvr-tenant
//!
//! Tenant resolution for the multi-tenant identity server.
//!
//! This crate answers three questions:
//! - which tenant does a request path address (`resolver`),
//! - how is the resolved tenant carried through a request (`context`),
//! - what is the tenant's authentication scheme called (`scheme`).
//!
//! Resolution is purely syntactic. There is no tenant catalog to consult;
//! a name that never had data configured simply resolves to a tenant whose
//! stores are empty.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod context;
pub mod resolver;
pub mod scheme;

pub use context::TenantContext;
pub use resolver::resolve_path;
pub use scheme::{SCHEME_PREFIX, scheme_name};
