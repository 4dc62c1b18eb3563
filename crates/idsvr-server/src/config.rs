//! Server configuration.
//!
//! Configuration is loaded from `IDSVR_*` environment variables with
//! defaults matching the reference deployment.

use std::time::Duration;

use idsvr_oidc::DEFAULT_COOKIE_LIFETIME;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server host to bind to.
    pub host: String,

    /// Server port.
    pub port: u16,

    /// Base URL for the server (used in generated URLs).
    pub base_url: String,

    /// Path prefix the tenant pipelines are mounted under.
    ///
    /// Must start with `/` and must not end with `/`.
    pub tenant_prefix: String,

    /// Session cookie lifetime in seconds. Absolute, non-sliding.
    pub cookie_lifetime_secs: u64,

    /// CORS allowed origins (comma-separated).
    pub cors_origins: Vec<String>,

    /// Log level.
    pub log_level: String,
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `IDSVR_TENANT_PREFIX` is set to a value that
    /// does not start with `/` or that ends with `/`.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        let host = std::env::var("IDSVR_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("IDSVR_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5050);

        let base_url =
            std::env::var("IDSVR_BASE_URL").unwrap_or_else(|_| format!("http://{host}:{port}"));

        let tenant_prefix = validated_tenant_prefix(
            std::env::var("IDSVR_TENANT_PREFIX").unwrap_or_else(|_| "/tenants".to_string()),
        )?;

        let cookie_lifetime_secs = std::env::var("IDSVR_COOKIE_LIFETIME")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_COOKIE_LIFETIME.as_secs());

        let cors_origins = std::env::var("IDSVR_CORS_ORIGINS")
            .map(|s| s.split(',').map(str::trim).map(String::from).collect())
            .unwrap_or_else(|_| vec!["*".to_string()]);

        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            host,
            port,
            base_url,
            tenant_prefix,
            cookie_lifetime_secs,
            cors_origins,
            log_level,
        })
    }

    /// Creates a configuration for testing.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0, // Random port
            base_url: "http://localhost:5050".to_string(),
            tenant_prefix: "/tenants".to_string(),
            cookie_lifetime_secs: DEFAULT_COOKIE_LIFETIME.as_secs(),
            cors_origins: vec!["*".to_string()],
            log_level: "debug".to_string(),
        }
    }

    /// Returns the session cookie lifetime.
    #[must_use]
    pub const fn cookie_lifetime(&self) -> Duration {
        Duration::from_secs(self.cookie_lifetime_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5050,
            base_url: "http://127.0.0.1:5050".to_string(),
            tenant_prefix: "/tenants".to_string(),
            cookie_lifetime_secs: DEFAULT_COOKIE_LIFETIME.as_secs(),
            cors_origins: vec!["*".to_string()],
            log_level: "info".to_string(),
        }
    }
}

/// Validates the tenant mount prefix.
///
/// The router nests the tenant pipelines under this prefix, so it must be
/// a non-root path without a trailing slash.
fn validated_tenant_prefix(prefix: String) -> anyhow::Result<String> {
    if !prefix.starts_with('/') || prefix.ends_with('/') {
        anyhow::bail!(
            "IDSVR_TENANT_PREFIX must start with '/' and must not end with '/' (got '{prefix}')"
        );
    }
    Ok(prefix)
}
