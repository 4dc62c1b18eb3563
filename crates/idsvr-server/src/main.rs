//! # idsvr
//!
//! Main entry point for the multi-tenant identity server.

#![forbid(unsafe_code)]
#![deny(warnings)]

use idsvr_server::{Server, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    tracing::info!(
        tenant_prefix = %config.tenant_prefix,
        "identity server starting"
    );

    Server::new(config).run().await
}
