//! End-to-end integration tests.
//!
//! These tests drive the real router in-process with
//! `tower::ServiceExt::oneshot`; no live network is involved.

mod common;

mod account_login;
mod provider_reuse;
mod tenant_routing;
