//! In-memory tenant cache with TTL
//!
//! Caches subdomain-to-tenant lookups for the tenant views so each page hit
//! doesn't reach the directory.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use tokio::{task::JoinHandle, time::MissedTickBehavior};

use tenancy_shared::Tenant;

/// Default cache TTL (5 minutes)
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

/// Cache entry with expiration
#[derive(Clone)]
struct CacheEntry {
    tenant: Option<Tenant>,
    expires_at: Instant,
}

impl CacheEntry {
    fn new(tenant: Option<Tenant>, ttl: Duration) -> Self {
        Self {
            tenant,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() > self.expires_at
    }
}

/// Thread-safe in-memory tenant cache
pub struct TenantCache {
    /// Maps subdomain -> tenant (None means no tenant has that subdomain)
    cache: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl Default for TenantCache {
    fn default() -> Self {
        Self::new()
    }
}

impl TenantCache {
    /// Create a new cache with default TTL
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_CACHE_TTL)
    }

    /// Create a new cache with custom TTL
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Get the cached tenant for a subdomain
    /// Returns Some(Some(tenant)) if found and valid
    /// Returns Some(None) if the subdomain was cached as unknown
    /// Returns None if not in cache or expired
    pub fn get(&self, subdomain: &str) -> Option<Option<Tenant>> {
        let cache = self.cache.read().ok()?;
        let entry = cache.get(subdomain)?;

        if entry.is_expired() {
            None
        } else {
            Some(entry.tenant.clone())
        }
    }

    /// Cache a subdomain -> tenant mapping
    pub fn set(&self, subdomain: &str, tenant: Option<Tenant>) {
        if let Ok(mut cache) = self.cache.write() {
            cache.insert(subdomain.to_string(), CacheEntry::new(tenant, self.ttl));
        }
    }

    /// Invalidate a specific subdomain
    pub fn invalidate(&self, subdomain: &str) {
        if let Ok(mut cache) = self.cache.write() {
            cache.remove(subdomain);
        }
    }

    /// Clear expired entries, returning how many were dropped
    pub fn cleanup(&self) -> usize {
        match self.cache.write() {
            Ok(mut cache) => {
                let before = cache.len();
                cache.retain(|_, entry| !entry.is_expired());
                before - cache.len()
            }
            Err(_) => 0,
        }
    }

    /// Run `cleanup` every `period` until the cache is dropped.
    ///
    /// Negative entries are kept for every unknown subdomain, so this must
    /// run for the lifetime of the server.
    pub fn spawn_cleanup(self: &Arc<Self>, period: Duration) -> JoinHandle<()> {
        let weak = Arc::downgrade(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let Some(cache) = weak.upgrade() else {
                    break;
                };
                let removed = cache.cleanup();
                if removed > 0 {
                    tracing::debug!(removed, "Pruned expired tenant cache entries");
                }
            }
        })
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.cache.read().map(|c| c.len()).unwrap_or(0)
    }
}
