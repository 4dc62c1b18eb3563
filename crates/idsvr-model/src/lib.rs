//! # idsvr-model
//!
//! Domain models for the multi-tenant identity server.
//!
//! This crate defines the entities the server operates on: tenants,
//! OAuth 2.0 / OIDC clients, scopes, users, and claims. Models carry no
//! storage or protocol behavior; those concerns live in the store and
//! host crates.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod claim;
pub mod client;
pub mod scope;
pub mod tenant;
pub mod user;

pub use claim::{Claim, ClaimValueType};
pub use client::{Client, GrantType};
pub use scope::{Scope, ScopeKind};
pub use tenant::Tenant;
pub use user::{ExternalIdentity, User};
