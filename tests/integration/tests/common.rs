//! Common test utilities and fixtures.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use idsvr_server::providers::TenantProviders;
use idsvr_server::{AppState, ServerConfig, create_router};
use idsvr_stores::ReferenceCatalog;

/// Builds the router plus a handle on its state.
///
/// The router shares the state through an `Arc`, so assertions against
/// the returned state observe the effects of requests sent through the
/// router.
pub fn test_app() -> (Router, AppState) {
    let config = ServerConfig::for_testing();
    let providers = TenantProviders::new(
        Arc::new(ReferenceCatalog::new()),
        config.tenant_prefix.clone(),
        config.cookie_lifetime(),
    );
    let state = AppState::new(config, Arc::new(providers));
    (create_router(state.clone()), state)
}

/// Sends a GET request through the router.
pub async fn get(router: &Router, path: &str) -> Response<Body> {
    router
        .clone()
        .oneshot(
            Request::builder()
                .uri(path)
                .body(Body::empty())
                .expect("valid request"),
        )
        .await
        .expect("router is infallible")
}

/// Sends a form POST through the router.
pub async fn post_form(router: &Router, path: &str, form: &str) -> Response<Body> {
    router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .expect("valid request"),
        )
        .await
        .expect("router is infallible")
}

/// Collects a response body as JSON.
pub async fn json_body(response: Response<Body>) -> anyhow::Result<serde_json::Value> {
    let bytes = response.into_body().collect().await?.to_bytes();
    Ok(serde_json::from_slice(&bytes)?)
}
