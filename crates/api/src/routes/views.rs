//! Tenant section and landing views
//!
//! These handlers produce the data a renderer needs for each page. The
//! tenant handlers only serve requests that the routing middleware rewrote,
//! identified by the `TenantContext` extension.

use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tenancy_shared::Tenant;

use crate::{error::ApiResult, routing::TenantContext, state::AppState};

const NOT_FOUND_TITLE: &str = "Tenant Not Found";
const NOT_FOUND_DESCRIPTION: &str = "The requested tenant could not be found.";

#[derive(Debug, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
}

/// Branding exposed as CSS custom properties
#[derive(Debug, Serialize)]
pub struct ThemeVariables {
    #[serde(rename = "--tenant-primary")]
    pub primary: String,
    #[serde(rename = "--tenant-secondary")]
    pub secondary: String,
    #[serde(rename = "--tenant-accent")]
    pub accent: String,
}

#[derive(Debug, Serialize)]
pub struct TenantView {
    pub section: &'static str,
    pub metadata: PageMetadata,
    pub theme: ThemeVariables,
    pub name: String,
    pub subdomain: String,
    pub logo: Option<String>,
    pub host: String,
}

impl TenantView {
    fn new(section: &'static str, tenant: Tenant, base_domain: &str) -> Self {
        let theme = tenant.effective_theme();
        Self {
            section,
            metadata: PageMetadata {
                title: tenant.settings.title,
                description: tenant.settings.description,
                site_name: Some(tenant.name.clone()),
            },
            theme: ThemeVariables {
                primary: theme.primary,
                secondary: theme.secondary,
                accent: theme.accent,
            },
            host: format!("{}.{}", tenant.subdomain, base_domain),
            name: tenant.name,
            subdomain: tenant.subdomain,
            logo: tenant.logo,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NotFoundView {
    pub metadata: PageMetadata,
}

/// Entry in the tenant switcher
#[derive(Debug, Serialize)]
pub struct TenantLink {
    pub name: String,
    pub subdomain: String,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct LandingView {
    pub metadata: PageMetadata,
    pub tenants: Vec<TenantLink>,
}

/// Tenant home page
pub async fn tenant_home(
    State(state): State<AppState>,
    context: Option<Extension<TenantContext>>,
) -> ApiResult<Response> {
    tenant_view(&state, context, "home").await
}

/// Tenant dashboard page
pub async fn tenant_dashboard(
    State(state): State<AppState>,
    context: Option<Extension<TenantContext>>,
) -> ApiResult<Response> {
    tenant_view(&state, context, "dashboard").await
}

/// Marketing landing page for the bare domain
pub async fn landing(State(state): State<AppState>) -> ApiResult<Json<LandingView>> {
    let base_domain = &state.config.base_domain;
    let tenants = state
        .directory
        .list_all()
        .await?
        .into_iter()
        .map(|tenant| TenantLink {
            url: format!("https://{}.{}", tenant.subdomain, base_domain),
            name: tenant.name,
            subdomain: tenant.subdomain,
        })
        .collect();

    Ok(Json(LandingView {
        metadata: PageMetadata {
            title: "Wildcard Subdomain Multi-Tenancy".to_string(),
            description: "Each tenant gets their own branded subdomain with isolated data and customization.".to_string(),
            site_name: None,
        },
        tenants,
    }))
}

async fn tenant_view(
    state: &AppState,
    context: Option<Extension<TenantContext>>,
    section: &'static str,
) -> ApiResult<Response> {
    // Requests that reached /tenant without a rewrite carry no context
    let Some(Extension(context)) = context else {
        return Ok(not_found());
    };

    match state.cached_tenant(&context.subdomain).await? {
        Some(tenant) => {
            Ok(Json(TenantView::new(section, tenant, &state.config.base_domain)).into_response())
        }
        None => {
            tracing::debug!(subdomain = %context.subdomain, "No tenant for subdomain");
            Ok(not_found())
        }
    }
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundView {
            metadata: PageMetadata {
                title: NOT_FOUND_TITLE.to_string(),
                description: NOT_FOUND_DESCRIPTION.to_string(),
                site_name: None,
            },
        }),
    )
        .into_response()
}
