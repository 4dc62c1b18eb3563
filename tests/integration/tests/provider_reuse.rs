//! Tenant pipeline reuse integration tests.

use axum::http::StatusCode;

use crate::common;

/// Tests that repeated requests reuse one pipeline per tenant.
#[tokio::test]
async fn test_pipeline_is_constructed_once_per_tenant() -> anyhow::Result<()> {
    let (router, state) = common::test_app();

    assert_eq!(state.providers().instance_count(), 0);

    common::get(&router, "/tenants/first").await;
    common::get(&router, "/tenants/first/account/login").await;
    common::get(&router, "/tenants/second").await;

    assert_eq!(state.providers().instance_count(), 2);

    Ok(())
}

/// Tests that tenant name casing does not multiply pipelines.
#[tokio::test]
async fn test_tenant_casing_reuses_the_pipeline() -> anyhow::Result<()> {
    let (router, state) = common::test_app();

    common::get(&router, "/tenants/first").await;
    common::get(&router, "/tenants/FIRST").await;
    common::get(&router, "/tenants/First").await;

    assert_eq!(state.providers().instance_count(), 1);

    Ok(())
}

/// Tests that concurrent first requests construct exactly one pipeline.
#[tokio::test]
async fn test_concurrent_first_requests_share_one_pipeline() -> anyhow::Result<()> {
    let (router, state) = common::test_app();

    let tasks: Vec<_> = (0..8)
        .map(|_| {
            let router = router.clone();
            tokio::spawn(async move {
                let response = common::get(&router, "/tenants/first").await;
                assert_eq!(response.status(), StatusCode::OK);
            })
        })
        .collect();

    for task in tasks {
        task.await?;
    }

    assert_eq!(state.providers().instance_count(), 1);

    Ok(())
}
