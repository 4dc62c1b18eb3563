//! Login and logout flow integration tests.

use axum::http::{StatusCode, header};

use crate::common;

/// Tests that the login form descriptor is served per tenant.
#[tokio::test]
async fn test_login_form_describes_the_tenant_form() -> anyhow::Result<()> {
    let (router, _state) = common::test_app();

    let response = common::get(&router, "/tenants/first/account/login").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::json_body(response).await?;
    assert_eq!(body["tenant"], "first");
    assert_eq!(body["action"], "/tenants/first/account/login");
    assert_eq!(body["fields"][0], "username");
    assert_eq!(body["fields"][1], "password");

    Ok(())
}

/// Tests the login flow end-to-end: valid credentials set the tenant
/// cookie and redirect to the tenant landing.
#[tokio::test]
async fn test_login_sets_the_tenant_cookie() -> anyhow::Result<()> {
    let (router, _state) = common::test_app();

    let response = common::post_form(
        &router,
        "/tenants/first/account/login",
        "username=alice&password=alice",
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("cookie set")
        .to_str()?;
    assert!(cookie.starts_with("idsvr.tenants.first=818727;"));
    assert!(cookie.contains("Max-Age=36000"));
    assert!(cookie.contains("HttpOnly"));

    let location = response
        .headers()
        .get(header::LOCATION)
        .expect("redirect target")
        .to_str()?;
    assert_eq!(location, "/tenants/first");

    Ok(())
}

/// Tests that a wrong password answers 401 without a cookie.
#[tokio::test]
async fn test_wrong_password_is_unauthorized() -> anyhow::Result<()> {
    let (router, _state) = common::test_app();

    let response = common::post_form(
        &router,
        "/tenants/first/account/login",
        "username=alice&password=wrong",
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get(header::SET_COOKIE).is_none());

    let body = common::json_body(response).await?;
    assert_eq!(body["error"], "invalid_credentials");

    Ok(())
}

/// Tests that credentials do not cross tenant boundaries.
#[tokio::test]
async fn test_credentials_are_tenant_isolated() -> anyhow::Result<()> {
    let (router, _state) = common::test_app();

    // alice belongs to `first` only
    let response = common::post_form(
        &router,
        "/tenants/second/account/login",
        "username=alice&password=alice",
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // bob signs in under `second` with a differently named cookie
    let response = common::post_form(
        &router,
        "/tenants/second/account/login",
        "username=bob&password=bob",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("cookie set")
        .to_str()?;
    assert!(cookie.starts_with("idsvr.tenants.second=88421113;"));

    Ok(())
}

/// Tests that an unconfigured tenant rejects every credential.
#[tokio::test]
async fn test_unknown_tenant_login_is_unauthorized() -> anyhow::Result<()> {
    let (router, _state) = common::test_app();

    let response = common::post_form(
        &router,
        "/tenants/nobody/account/login",
        "username=alice&password=alice",
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Tests that logout removes the cookie and redirects to the root.
#[tokio::test]
async fn test_logout_clears_the_tenant_cookie() -> anyhow::Result<()> {
    let (router, _state) = common::test_app();

    let response =
        common::post_form(&router, "/tenants/first/account/logout", "").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("cookie removed")
        .to_str()?;
    assert!(cookie.starts_with("idsvr.tenants.first=;"));
    assert!(cookie.contains("Max-Age=0"));

    let location = response
        .headers()
        .get(header::LOCATION)
        .expect("redirect target")
        .to_str()?;
    assert_eq!(location, "/");

    Ok(())
}

/// Tests that logout also answers GET.
#[tokio::test]
async fn test_logout_accepts_get() -> anyhow::Result<()> {
    let (router, _state) = common::test_app();

    let response = common::get(&router, "/tenants/first/account/logout").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    Ok(())
}
