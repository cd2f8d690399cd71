//! HTTP routes

pub mod health;
pub mod tenants;
pub mod views;

use axum::{extract::DefaultBodyLimit, middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{routing::tenant_routing_middleware, state::AppState};

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    // Health check routes (at root level for infrastructure monitoring)
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness));

    // Tenant directory API
    let api_routes = Router::new()
        .route(
            "/tenants",
            get(tenants::list_tenants).post(tenants::create_tenant),
        )
        .route("/tenants/:subdomain", get(tenants::get_tenant));

    // Tenant section, reached through the host rewrite ("/" becomes "/tenant/")
    let tenant_routes = Router::new()
        .route("/tenant", get(views::tenant_home))
        .route("/tenant/", get(views::tenant_home))
        .route("/tenant/dashboard", get(views::tenant_dashboard));

    let app = Router::new()
        .route("/", get(views::landing))
        .merge(tenant_routes)
        .merge(health_routes)
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(1024 * 1024)) // 1MB
        .with_state(state.clone());

    // Host routing wraps the whole app so rewrites happen before route matching
    Router::new()
        .fallback_service(app)
        .layer(middleware::from_fn_with_state(
            state,
            tenant_routing_middleware,
        ))
        .layer(TraceLayer::new_for_http())
}
