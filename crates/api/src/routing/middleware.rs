//! Tenant routing middleware
//!
//! Must wrap the application router from the outside so the rewritten URI is
//! the one used for route matching (see `routes::create_router`).

use axum::{
    extract::{Request, State},
    http::{
        header::{InvalidHeaderValue, HOST},
        uri::PathAndQuery,
        HeaderValue, Uri,
    },
    middleware::Next,
    response::Response,
};

use super::router::{route_request, RoutingDecision, TenantContext, TENANT_HEADER};
use crate::state::AppState;

/// Resolve the request host and rewrite tenant requests into the tenant section
pub async fn tenant_routing_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();

    if is_excluded_path(&path, &state.config.excluded_prefixes) {
        return next.run(request).await;
    }

    let host = request
        .headers()
        .get(HOST)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("")
        .to_string();

    match route_request(&host, &path) {
        RoutingDecision::PassThrough => {
            tracing::debug!(%host, %path, "Passing request through");
        }
        RoutingDecision::RewriteToTenant {
            tenant,
            path: rewritten,
        } => match apply_rewrite(&mut request, &tenant, &rewritten) {
            Ok(()) => {
                tracing::debug!(
                    %host,
                    %path,
                    %rewritten,
                    tenant = %tenant.subdomain,
                    "Rewrote request to tenant section"
                );
            }
            Err(e) => {
                tracing::warn!(%host, %path, error = %e, "Tenant rewrite failed, passing through");
            }
        },
    }

    next.run(request).await
}

/// Check whether a path bypasses tenant routing.
///
/// A path is excluded when the text after its leading `/` starts with one of
/// `prefixes` (so `api` also covers `/api-docs`).
pub fn is_excluded_path(path: &str, prefixes: &[String]) -> bool {
    let rest = path.strip_prefix('/').unwrap_or(path);
    prefixes.iter().any(|prefix| rest.starts_with(prefix.as_str()))
}

#[derive(Debug, thiserror::Error)]
enum RewriteError {
    #[error("invalid rewritten URI: {0}")]
    Uri(#[from] axum::http::Error),
    #[error("invalid tenant header value: {0}")]
    Header(#[from] InvalidHeaderValue),
}

fn apply_rewrite(
    request: &mut Request,
    tenant: &TenantContext,
    path: &str,
) -> Result<(), RewriteError> {
    let uri = rewrite_uri(request.uri(), path)?;
    let header = HeaderValue::from_str(&tenant.subdomain)?;

    *request.uri_mut() = uri;
    request.headers_mut().insert(TENANT_HEADER, header);
    request.extensions_mut().insert(tenant.clone());
    Ok(())
}

/// Replace the path of `uri`, keeping scheme, authority and query
fn rewrite_uri(uri: &Uri, path: &str) -> Result<Uri, axum::http::Error> {
    let path_and_query = match uri.query() {
        Some(query) => format!("{}?{}", path, query),
        None => path.to_string(),
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(PathAndQuery::try_from(path_and_query)?);
    Ok(Uri::from_parts(parts)?)
}
