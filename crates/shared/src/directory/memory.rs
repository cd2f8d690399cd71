//! In-memory tenant directory backed by `DashMap`.

use async_trait::async_trait;
use dashmap::DashMap;

use super::TenantDirectory;
use crate::error::DirectoryResult;
use crate::types::{NewTenant, Tenant, TenantSettings, TenantTheme};

/// Thread-safe in-memory tenant storage.
///
/// State lives for the lifetime of the process and is lost on restart.
#[derive(Default)]
pub struct InMemoryDirectory {
    tenants: DashMap<String, Tenant>,
}

impl InMemoryDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self {
            tenants: DashMap::new(),
        }
    }

    /// Creates a directory holding the demo tenants `tenant1`, `docs` and `blog`.
    pub fn with_demo_tenants() -> Self {
        let directory = Self::new();
        for tenant in demo_tenants() {
            directory.store(tenant);
        }
        directory
    }

    /// Number of stored tenants.
    pub fn len(&self) -> usize {
        self.tenants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tenants.is_empty()
    }

    fn store(&self, tenant: NewTenant) -> Tenant {
        let tenant = tenant.into_tenant();
        self.tenants.insert(tenant.subdomain.clone(), tenant.clone());
        tenant
    }
}

#[async_trait]
impl TenantDirectory for InMemoryDirectory {
    async fn lookup(&self, subdomain: &str) -> DirectoryResult<Option<Tenant>> {
        Ok(self.tenants.get(subdomain).map(|entry| entry.value().clone()))
    }

    async fn list_all(&self) -> DirectoryResult<Vec<Tenant>> {
        let mut tenants: Vec<Tenant> = self
            .tenants
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        tenants.sort_by(|a, b| a.subdomain.cmp(&b.subdomain));
        Ok(tenants)
    }

    async fn insert(&self, tenant: NewTenant) -> DirectoryResult<Tenant> {
        Ok(self.store(tenant))
    }
}

fn demo_tenants() -> Vec<NewTenant> {
    vec![
        NewTenant {
            name: "Acme Corp".to_string(),
            subdomain: "tenant1".to_string(),
            logo: None,
            theme: Some(TenantTheme::new("#3B82F6", "#1E40AF", "#F59E0B")),
            settings: TenantSettings {
                title: "Acme Corp Dashboard".to_string(),
                description: "Welcome to Acme Corp's business portal".to_string(),
                custom_domain: None,
            },
        },
        NewTenant {
            name: "Documentation".to_string(),
            subdomain: "docs".to_string(),
            logo: None,
            theme: Some(TenantTheme::new("#10B981", "#047857", "#F59E0B")),
            settings: TenantSettings {
                title: "Documentation Portal".to_string(),
                description: "Comprehensive documentation and guides".to_string(),
                custom_domain: None,
            },
        },
        NewTenant {
            name: "Company Blog".to_string(),
            subdomain: "blog".to_string(),
            logo: None,
            theme: Some(TenantTheme::new("#8B5CF6", "#7C3AED", "#F59E0B")),
            settings: TenantSettings {
                title: "Company Blog".to_string(),
                description: "Latest news and updates from our team".to_string(),
                custom_domain: None,
            },
        },
    ]
}
