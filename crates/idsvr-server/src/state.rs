//! Application state management.
//!
//! This module defines the shared state that is passed to all request
//! handlers.

use std::sync::Arc;

use idsvr_oidc::TenantProvider;
use idsvr_tenant::TenantContext;

use crate::config::ServerConfig;
use crate::providers::TenantProviders;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: ServerConfig,

    /// Per-tenant provider map.
    pub providers: Arc<TenantProviders>,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub fn new(config: ServerConfig, providers: Arc<TenantProviders>) -> Self {
        Self { config, providers }
    }

    /// Returns the provider for the request's tenant, constructing it on
    /// first use.
    #[must_use]
    pub fn provider_for(&self, context: &TenantContext) -> Arc<TenantProvider> {
        self.providers.provider_for(context)
    }

    /// Returns the per-tenant provider map.
    #[must_use]
    pub fn providers(&self) -> &TenantProviders {
        &self.providers
    }

    /// Returns the server configuration.
    #[must_use]
    pub const fn config(&self) -> &ServerConfig {
        &self.config
    }
}
