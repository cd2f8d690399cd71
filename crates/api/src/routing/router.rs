//! Routing decision for a resolved host

use super::host_resolver::resolve_subdomain;

/// Path prefix of the tenant section
pub const TENANT_PATH_PREFIX: &str = "/tenant";

/// Header carrying the tenant subdomain on rewritten requests
pub const TENANT_HEADER: &str = "x-tenant";

/// Subdomain treated as an alias of the bare domain
pub const WWW_SUBDOMAIN: &str = "www";

/// Tenant identity attached to a rewritten request.
///
/// Not checked against the directory; handlers look the tenant up themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantContext {
    pub subdomain: String,
}

impl TenantContext {
    pub fn new(subdomain: impl Into<String>) -> Self {
        Self {
            subdomain: subdomain.into(),
        }
    }
}

/// What to do with an inbound request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingDecision {
    /// Serve the request unmodified
    PassThrough,
    /// Serve `path` in the tenant section on behalf of `tenant`
    RewriteToTenant { tenant: TenantContext, path: String },
}

impl RoutingDecision {
    pub fn is_pass_through(&self) -> bool {
        matches!(self, RoutingDecision::PassThrough)
    }
}

/// Decide how to route a request given its resolved subdomain and path
pub fn decide(subdomain: Option<&str>, path: &str) -> RoutingDecision {
    match subdomain {
        // An empty first label (".example.com") counts as no subdomain
        None | Some("") => RoutingDecision::PassThrough,
        Some(WWW_SUBDOMAIN) => RoutingDecision::PassThrough,
        Some(subdomain) => RoutingDecision::RewriteToTenant {
            tenant: TenantContext::new(subdomain),
            path: format!("{}{}", TENANT_PATH_PREFIX, path),
        },
    }
}

/// Resolve `host` and decide in one step
pub fn route_request(host: &str, path: &str) -> RoutingDecision {
    decide(resolve_subdomain(host), path)
}
