//! Router configuration.
//!
//! Builds the Axum router: host routes at the root, tenant pipelines
//! nested under the configured mount prefix. Every route beneath the
//! prefix passes through the tenant middleware, including the fallback,
//! so a missing tenant segment is answered before any handler runs.

use axum::{Json, Router, extract::State, http::StatusCode, middleware, routing::get};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::account;
use crate::middleware::tenant_context_middleware;
use crate::state::AppState;

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    let tenant_routes = Router::new()
        .route("/{tenant}", get(account::tenant_landing))
        .route("/{tenant}/", get(account::tenant_landing))
        .route(
            "/{tenant}/account/login",
            get(account::login_form).post(account::login_submit),
        )
        .route(
            "/{tenant}/account/logout",
            get(account::logout).post(account::logout),
        )
        .fallback(account::not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            tenant_context_middleware,
        ));

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest(&state.config.tenant_prefix, tenant_routes)
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .fallback(account::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
}

/// Server information response.
#[derive(Serialize)]
pub struct ServerInfo {
    name: String,
    version: String,
    tenants: String,
}

/// Root endpoint handler.
async fn root(State(state): State<AppState>) -> Json<ServerInfo> {
    Json(ServerInfo {
        name: "idsvr".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        tenants: state.config.tenant_prefix.clone(),
    })
}

/// Basic health check.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    })
}

/// Readiness probe.
///
/// All state is in-memory, so the server is ready as soon as it answers.
async fn readiness_check() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ready",
            version: None,
        }),
    )
}
