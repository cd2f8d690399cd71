//! Host-based tenant routing
//!
//! This module maps incoming Host headers to tenant sections:
//! - Tenant subdomains: acme.yourdomain.com/dashboard -> /tenant/dashboard
//! - Bare domain, www, localhost and IP hosts are served unmodified

mod cache;
mod host_resolver;
mod middleware;
mod router;

pub use cache::{TenantCache, DEFAULT_CACHE_TTL};
pub use host_resolver::resolve_subdomain;
pub use middleware::{is_excluded_path, tenant_routing_middleware};
pub use router::{
    decide, route_request, RoutingDecision, TenantContext, TENANT_HEADER, TENANT_PATH_PREFIX,
    WWW_SUBDOMAIN,
};
