//! # idsvr-server
//!
//! Axum host for the multi-tenant identity server.
//!
//! This crate wires the tenant machinery into an HTTP server:
//! - tenant middleware resolving every request under the mount prefix,
//! - lazy construction of one pipeline per tenant on first request,
//! - tenant account routes (landing, login, logout),
//! - health endpoints.
//!
//! ## Usage
//!
//! ```ignore
//! use idsvr_server::{Server, ServerConfig};
//!
//! let config = ServerConfig::from_env()?;
//! let server = Server::new(config);
//! server.run().await?;
//! ```

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod account;
pub mod config;
pub mod error;
pub mod middleware;
pub mod providers;
pub mod router;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use router::create_router;
pub use state::AppState;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use idsvr_stores::ReferenceCatalog;

use crate::providers::TenantProviders;

/// The identity server.
pub struct Server {
    config: ServerConfig,
}

impl Server {
    /// Creates a new server instance.
    #[must_use]
    pub const fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Runs the server.
    ///
    /// Starts the HTTP server and blocks until it receives a shutdown
    /// signal.
    ///
    /// # Errors
    ///
    /// Returns an error if the listen address cannot be bound or the
    /// server fails while serving.
    pub async fn run(self) -> anyhow::Result<()> {
        let app = create_router(self.build_state());

        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port).parse()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("server listening on http://{addr}");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("server shutdown complete");
        Ok(())
    }

    /// Returns the server configuration.
    #[must_use]
    pub const fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Creates a test router without starting the server.
    ///
    /// This is useful for integration testing.
    #[must_use]
    pub fn test_router(&self) -> Router {
        create_router(self.build_state())
    }

    fn build_state(&self) -> AppState {
        let providers = TenantProviders::new(
            Arc::new(ReferenceCatalog::new()),
            self.config.tenant_prefix.clone(),
            self.config.cookie_lifetime(),
        );
        AppState::new(self.config.clone(), Arc::new(providers))
    }
}

/// Waits for a shutdown signal.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
