//! Tenancy API Library
//!
//! Host-based tenant routing and the tenant directory HTTP API.

pub mod config;
pub mod error;
pub mod routes;
pub mod routing;
pub mod state;

pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use routing::{RoutingDecision, TenantCache, TenantContext};
pub use state::AppState;
