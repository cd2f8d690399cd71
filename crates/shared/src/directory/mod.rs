//! Tenant directory
//!
//! The directory is the lookup store for tenant records, keyed by subdomain.
//! Two backends are provided:
//! - [`InMemoryDirectory`]: process-lifetime map, optionally seeded with demo tenants
//! - [`PgDirectory`]: PostgreSQL `tenants` table

mod memory;
mod postgres;

use async_trait::async_trait;

use crate::error::DirectoryResult;
use crate::types::{NewTenant, Tenant};

pub use memory::InMemoryDirectory;
pub use postgres::PgDirectory;

/// Lookup, list and insert operations over tenant records
#[async_trait]
pub trait TenantDirectory: Send + Sync {
    /// Find a tenant by subdomain
    async fn lookup(&self, subdomain: &str) -> DirectoryResult<Option<Tenant>>;

    /// All tenants, ordered by subdomain
    async fn list_all(&self) -> DirectoryResult<Vec<Tenant>>;

    /// Store a tenant under its subdomain.
    ///
    /// The identifier is the subdomain. Inserting a subdomain that already
    /// exists replaces the previous record.
    async fn insert(&self, tenant: NewTenant) -> DirectoryResult<Tenant>;

    /// Check the backend can serve requests
    async fn ping(&self) -> DirectoryResult<()> {
        Ok(())
    }
}
