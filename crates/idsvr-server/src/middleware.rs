//! Tenant resolution middleware.
//!
//! Every request under the tenant mount prefix passes through
//! [`tenant_context_middleware`], which resolves the tenant from the path
//! remaining under the prefix and inserts a [`TenantContext`] into the
//! request's extension map. The context is set at most once, before any
//! handler runs, and is owned by the request, so it cannot leak across
//! requests.
//!
//! Handlers read the context through the [`CurrentTenant`] extractor. A
//! request without a tenant segment never gets a context and is rejected
//! by the middleware; a handler that reads the context without the
//! middleware having run is a wiring fault and answers 500.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};

use idsvr_tenant::{TenantContext, resolve_path};

use crate::error::ApiError;
use crate::state::AppState;

/// Resolves the tenant from the request path and stores the context.
///
/// The resolver runs on the path remaining under the mount prefix, so
/// `/tenants/first/account/login` resolves to tenant `first` no matter
/// what the prefix is configured as. Paths with no word-character segment
/// under the prefix do not resolve and are answered with the routing-miss
/// response.
pub async fn tenant_context_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let resolved = {
        let path = request.uri().path();
        let residual = path
            .strip_prefix(state.config.tenant_prefix.as_str())
            .unwrap_or(path);
        resolve_path(residual)
    };

    match resolved {
        Some(tenant) => {
            tracing::debug!(tenant = %tenant, path = %request.uri().path(), "resolved tenant");
            request.extensions_mut().insert(TenantContext::new(tenant));
            next.run(request).await
        }
        None => ApiError::TenantNotResolved.into_response(),
    }
}

/// Extractor for the request's tenant context.
///
/// Rejects with a 500 configuration-error response when the context is
/// absent; that only happens when a tenant-scoped handler is mounted
/// outside the tenant middleware.
#[derive(Debug, Clone)]
pub struct CurrentTenant(pub TenantContext);

impl<S> FromRequestParts<S> for CurrentTenant
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<TenantContext>().cloned().map(Self).ok_or_else(|| {
            tracing::error!(
                path = %parts.uri.path(),
                "tenant context was read before it was set; check the route is mounted \
                 under the tenant middleware"
            );
            ApiError::TenantContextMissing
        })
    }
}
