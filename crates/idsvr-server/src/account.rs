//! Tenant account routes.
//!
//! Landing, login, and logout for one tenant's pipeline. Responses are
//! JSON plus redirects; there is no view rendering. The session cookie is
//! named after the tenant's authentication scheme, so two tenants on the
//! same host never share a session.

use axum::{
    Form, Json,
    extract::{OriginalUri, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::middleware::CurrentTenant;
use crate::state::AppState;

/// Tenant landing descriptor.
#[derive(Debug, Serialize)]
pub struct TenantLanding {
    /// Tenant name.
    pub tenant: String,
    /// The tenant's authentication scheme (also the cookie name).
    pub authentication_scheme: String,
    /// Path the tenant's pipeline is issued under.
    pub issuer_path: String,
    /// Number of clients registered for this tenant.
    pub client_count: usize,
}

/// Login form descriptor.
#[derive(Debug, Serialize)]
pub struct LoginFormDescriptor {
    /// Tenant name.
    pub tenant: String,
    /// Where to POST the form.
    pub action: String,
    /// Expected form fields.
    pub fields: &'static [&'static str],
}

/// Form data for login submission.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    /// Username.
    pub username: String,
    /// Password.
    pub password: String,
}

/// Shows the tenant landing descriptor.
///
/// Mounts for any syntactic tenant name; a tenant without configured data
/// reports zero clients rather than an error.
pub async fn tenant_landing(
    State(state): State<AppState>,
    CurrentTenant(context): CurrentTenant,
) -> ApiResult<Json<TenantLanding>> {
    let provider = state.provider_for(&context);
    let registry = provider.client_registry(&context)?;

    Ok(Json(TenantLanding {
        tenant: context.tenant().name().to_string(),
        authentication_scheme: provider.options().authentication_scheme.clone(),
        issuer_path: provider.options().issuer_path.clone(),
        client_count: registry.client_count(),
    }))
}

/// Describes the login form.
pub async fn login_form(
    State(state): State<AppState>,
    CurrentTenant(context): CurrentTenant,
) -> Json<LoginFormDescriptor> {
    let provider = state.provider_for(&context);

    Json(LoginFormDescriptor {
        tenant: context.tenant().name().to_string(),
        action: format!("{}/account/login", provider.options().issuer_path),
        fields: &["username", "password"],
    })
}

/// Handles login submission.
///
/// Success sets the tenant's session cookie (value = the user's subject,
/// absolute lifetime) and redirects to the tenant landing. A credential
/// mismatch is a normal negative outcome and answers 401.
pub async fn login_submit(
    State(state): State<AppState>,
    CurrentTenant(context): CurrentTenant,
    Form(form): Form<LoginForm>,
) -> ApiResult<Response> {
    let provider = state.provider_for(&context);
    let directory = provider.user_directory(&context)?;

    if !directory
        .validate_credentials(&form.username, &form.password)
        .await?
    {
        tracing::debug!(tenant = %context.tenant(), "login rejected");
        return Err(ApiError::InvalidCredentials);
    }

    let user = directory
        .find_by_username(&form.username)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    let options = provider.options();
    let cookie = format!(
        "{}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
        options.cookie_name,
        user.subject,
        options.cookie_max_age_secs()
    );

    tracing::info!(
        tenant = %context.tenant(),
        subject = %user.subject,
        "user signed in"
    );

    Ok((
        StatusCode::SEE_OTHER,
        [
            (header::SET_COOKIE, cookie),
            (header::LOCATION, options.issuer_path.clone()),
        ],
    )
        .into_response())
}

/// Handles logout.
///
/// Removes the tenant's session cookie and redirects to the application
/// root. Accepts GET as well as POST.
pub async fn logout(
    State(state): State<AppState>,
    CurrentTenant(context): CurrentTenant,
) -> Response {
    let provider = state.provider_for(&context);
    let cookie = format!(
        "{}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax",
        provider.options().cookie_name
    );

    tracing::info!(tenant = %context.tenant(), "user signed out");

    (
        StatusCode::SEE_OTHER,
        [
            (header::SET_COOKIE, cookie),
            (header::LOCATION, "/".to_string()),
        ],
    )
        .into_response()
}

/// Fallback for unmatched routes.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use idsvr_model::Tenant;
    use idsvr_stores::ReferenceCatalog;
    use idsvr_tenant::TenantContext;

    use super::*;
    use crate::config::ServerConfig;
    use crate::providers::TenantProviders;

    fn test_state() -> AppState {
        let config = ServerConfig::for_testing();
        let providers = TenantProviders::new(
            Arc::new(ReferenceCatalog::new()),
            config.tenant_prefix.clone(),
            config.cookie_lifetime(),
        );
        AppState::new(config, Arc::new(providers))
    }

    fn current(name: &str) -> CurrentTenant {
        CurrentTenant(TenantContext::new(Tenant::new(name)))
    }

    fn header_str<'a>(response: &'a Response, name: header::HeaderName) -> &'a str {
        response
            .headers()
            .get(name)
            .expect("header present")
            .to_str()
            .unwrap()
    }

    #[tokio::test]
    async fn landing_describes_the_tenant_pipeline() {
        let landing = tenant_landing(State(test_state()), current("first"))
            .await
            .unwrap();

        assert_eq!(landing.0.tenant, "first");
        assert_eq!(landing.0.authentication_scheme, "idsvr.tenants.first");
        assert_eq!(landing.0.issuer_path, "/tenants/first");
        assert_eq!(landing.0.client_count, 1);
    }

    #[tokio::test]
    async fn landing_mounts_for_unknown_tenants() {
        let landing = tenant_landing(State(test_state()), current("nobody"))
            .await
            .unwrap();

        assert_eq!(landing.0.client_count, 0);
    }

    #[tokio::test]
    async fn login_sets_the_tenant_cookie_and_redirects() {
        let response = login_submit(
            State(test_state()),
            current("first"),
            Form(LoginForm {
                username: "alice".to_string(),
                password: "alice".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let cookie = header_str(&response, header::SET_COOKIE);
        assert!(cookie.starts_with("idsvr.tenants.first=818727;"));
        assert!(cookie.contains("Max-Age=36000"));
        assert!(cookie.contains("HttpOnly"));

        assert_eq!(header_str(&response, header::LOCATION), "/tenants/first");
    }

    #[tokio::test]
    async fn wrong_password_is_rejected_without_a_cookie() {
        let err = login_submit(
            State(test_state()),
            current("first"),
            Form(LoginForm {
                username: "alice".to_string(),
                password: "wrong".to_string(),
            }),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ApiError::InvalidCredentials));
    }

    #[tokio::test]
    async fn credentials_do_not_cross_tenants() {
        let err = login_submit(
            State(test_state()),
            current("second"),
            Form(LoginForm {
                username: "alice".to_string(),
                password: "alice".to_string(),
            }),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ApiError::InvalidCredentials));
    }

    #[tokio::test]
    async fn logout_removes_the_cookie_and_redirects_to_root() {
        let response = logout(State(test_state()), current("first")).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let cookie = header_str(&response, header::SET_COOKIE);
        assert!(cookie.starts_with("idsvr.tenants.first=;"));
        assert!(cookie.contains("Max-Age=0"));

        assert_eq!(header_str(&response, header::LOCATION), "/");
    }
}
