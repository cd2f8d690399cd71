//! Shared application state

use std::sync::Arc;

use tenancy_shared::{Tenant, TenantDirectory};

use crate::{config::Config, error::ApiResult, routing::TenantCache};

/// State handed to every handler and middleware
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub directory: Arc<dyn TenantDirectory>,
    pub tenant_cache: Arc<TenantCache>,
}

impl AppState {
    pub fn new(config: Config, directory: Arc<dyn TenantDirectory>) -> Self {
        let tenant_cache = Arc::new(TenantCache::with_ttl(config.tenant_cache_ttl));
        Self {
            config: Arc::new(config),
            directory,
            tenant_cache,
        }
    }

    /// Look a tenant up through the cache
    pub async fn cached_tenant(&self, subdomain: &str) -> ApiResult<Option<Tenant>> {
        if let Some(cached) = self.tenant_cache.get(subdomain) {
            return Ok(cached);
        }

        let tenant = self.directory.lookup(subdomain).await?;
        self.tenant_cache.set(subdomain, tenant.clone());
        Ok(tenant)
    }
}
