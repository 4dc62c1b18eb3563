//! Tenant routing integration tests.

use axum::http::StatusCode;

use crate::common;

/// Tests that a tenant pipeline mounts and describes itself.
#[tokio::test]
async fn test_landing_mounts_tenant_pipeline() -> anyhow::Result<()> {
    let (router, _state) = common::test_app();

    let response = common::get(&router, "/tenants/first").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::json_body(response).await?;
    assert_eq!(body["tenant"], "first");
    assert_eq!(body["authentication_scheme"], "idsvr.tenants.first");
    assert_eq!(body["issuer_path"], "/tenants/first");
    assert_eq!(body["client_count"], 1);

    Ok(())
}

/// Tests that the trailing-slash form of the landing also mounts.
#[tokio::test]
async fn test_landing_accepts_trailing_slash() -> anyhow::Result<()> {
    let (router, _state) = common::test_app();

    let response = common::get(&router, "/tenants/second/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::json_body(response).await?;
    assert_eq!(body["tenant"], "second");

    Ok(())
}

/// Tests that tenant names are normalized to lower case.
#[tokio::test]
async fn test_tenant_names_are_lowercased() -> anyhow::Result<()> {
    let (router, _state) = common::test_app();

    let response = common::get(&router, "/tenants/FIRST").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::json_body(response).await?;
    assert_eq!(body["tenant"], "first");
    assert_eq!(body["authentication_scheme"], "idsvr.tenants.first");

    Ok(())
}

/// Tests that an unconfigured tenant still mounts, with empty data.
#[tokio::test]
async fn test_unknown_tenant_mounts_with_empty_registry() -> anyhow::Result<()> {
    let (router, _state) = common::test_app();

    let response = common::get(&router, "/tenants/nobody").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::json_body(response).await?;
    assert_eq!(body["tenant"], "nobody");
    assert_eq!(body["client_count"], 0);

    Ok(())
}

/// Tests that a missing tenant segment is answered with the routing miss.
#[tokio::test]
async fn test_missing_tenant_segment_is_a_routing_miss() -> anyhow::Result<()> {
    let (router, _state) = common::test_app();

    for path in ["/tenants", "/tenants/", "/tenants/---"] {
        let response = common::get(&router, path).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "path {path}");

        let body = common::json_body(response).await?;
        assert_eq!(body["error"], "not_found", "path {path}");
    }

    Ok(())
}

/// Tests that unmatched routes under a tenant answer 404.
#[tokio::test]
async fn test_unmatched_tenant_route_is_not_found() -> anyhow::Result<()> {
    let (router, _state) = common::test_app();

    let response = common::get(&router, "/tenants/first/unknown").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = common::json_body(response).await?;
    assert_eq!(body["error"], "not_found");
    let description = body["error_description"].as_str().unwrap_or_default();
    assert!(description.contains("/tenants/first/unknown"));

    Ok(())
}

/// Tests that unmatched routes outside the tenant prefix answer 404.
#[tokio::test]
async fn test_unmatched_root_route_is_not_found() -> anyhow::Result<()> {
    let (router, _state) = common::test_app();

    let response = common::get(&router, "/nothing/here").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests the host endpoints.
#[tokio::test]
async fn test_host_endpoints_respond() -> anyhow::Result<()> {
    let (router, _state) = common::test_app();

    let health = common::get(&router, "/health").await;
    assert_eq!(health.status(), StatusCode::OK);
    assert_eq!(common::json_body(health).await?["status"], "healthy");

    let ready = common::get(&router, "/ready").await;
    assert_eq!(ready.status(), StatusCode::OK);
    assert_eq!(common::json_body(ready).await?["status"], "ready");

    let root = common::get(&router, "/").await;
    assert_eq!(root.status(), StatusCode::OK);
    let body = common::json_body(root).await?;
    assert_eq!(body["name"], "idsvr");
    assert_eq!(body["tenants"], "/tenants");

    Ok(())
}
