//! Tenant directory API
//!
//! `GET /api/tenants`, `POST /api/tenants`, `GET /api/tenants/:subdomain`

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tenancy_shared::{NewTenant, Tenant, TenantSettings, TenantTheme};

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Body of `POST /api/tenants`.
///
/// `name` and `subdomain` are optional here so a missing field is reported
/// as a validation error rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreateTenantRequest {
    pub name: Option<String>,
    pub subdomain: Option<String>,
    pub logo: Option<String>,
    pub theme: Option<TenantTheme>,
    pub settings: Option<TenantSettings>,
}

impl CreateTenantRequest {
    /// Check required fields and fill in default branding
    fn into_new_tenant(self) -> ApiResult<NewTenant> {
        let (name, subdomain) = match (self.name, self.subdomain) {
            (Some(name), Some(subdomain)) if !name.is_empty() && !subdomain.is_empty() => {
                (name, subdomain)
            }
            _ => {
                return Err(ApiError::Validation(
                    "Name and subdomain are required".to_string(),
                ))
            }
        };

        let settings = self
            .settings
            .unwrap_or_else(|| TenantSettings::default_for(&name));

        Ok(NewTenant {
            name,
            subdomain,
            logo: self.logo,
            theme: Some(self.theme.unwrap_or_default()),
            settings,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct TenantResponse {
    pub tenant: Tenant,
}

#[derive(Debug, Serialize)]
pub struct TenantListResponse {
    pub tenants: Vec<Tenant>,
}

// =============================================================================
// Route handlers
// =============================================================================

/// List all tenants
pub async fn list_tenants(State(state): State<AppState>) -> ApiResult<Json<TenantListResponse>> {
    let tenants = state.directory.list_all().await?;
    Ok(Json(TenantListResponse { tenants }))
}

/// Create a tenant, replacing any tenant with the same subdomain
pub async fn create_tenant(
    State(state): State<AppState>,
    payload: Result<Json<CreateTenantRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TenantResponse>)> {
    let Json(req) = payload?;
    let new_tenant = req.into_new_tenant()?;

    let tenant = state.directory.insert(new_tenant).await?;
    state.tenant_cache.invalidate(&tenant.subdomain);

    tracing::info!(subdomain = %tenant.subdomain, name = %tenant.name, "Tenant created");

    Ok((StatusCode::CREATED, Json(TenantResponse { tenant })))
}

/// Get a tenant by subdomain
pub async fn get_tenant(
    State(state): State<AppState>,
    Path(subdomain): Path<String>,
) -> ApiResult<Json<TenantResponse>> {
    let tenant = state
        .directory
        .lookup(&subdomain)
        .await?
        .ok_or(ApiError::TenantNotFound)?;

    Ok(Json(TenantResponse { tenant }))
}
