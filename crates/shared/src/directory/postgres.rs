//! PostgreSQL tenant directory

use async_trait::async_trait;
use sqlx::PgPool;

use super::TenantDirectory;
use crate::error::DirectoryResult;
use crate::types::{NewTenant, Tenant, TenantSettings, TenantTheme};

/// Database row for a tenant
#[derive(Debug, sqlx::FromRow)]
struct TenantRow {
    subdomain: String,
    name: String,
    logo: Option<String>,
    theme_primary: Option<String>,
    theme_secondary: Option<String>,
    theme_accent: Option<String>,
    title: String,
    description: String,
    custom_domain: Option<String>,
}

impl From<TenantRow> for Tenant {
    fn from(row: TenantRow) -> Self {
        // A theme is only present when all three colours are stored
        let theme = match (row.theme_primary, row.theme_secondary, row.theme_accent) {
            (Some(primary), Some(secondary), Some(accent)) => {
                Some(TenantTheme::new(primary, secondary, accent))
            }
            _ => None,
        };

        Self {
            id: row.subdomain.clone(),
            name: row.name,
            subdomain: row.subdomain,
            logo: row.logo,
            theme,
            settings: TenantSettings {
                title: row.title,
                description: row.description,
                custom_domain: row.custom_domain,
            },
        }
    }
}

const TENANT_COLUMNS: &str = "subdomain, name, logo, theme_primary, theme_secondary, \
                              theme_accent, title, description, custom_domain";

/// Tenant directory stored in the `tenants` table
#[derive(Clone)]
pub struct PgDirectory {
    pool: PgPool,
}

impl PgDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TenantDirectory for PgDirectory {
    async fn lookup(&self, subdomain: &str) -> DirectoryResult<Option<Tenant>> {
        let query = format!("SELECT {} FROM tenants WHERE subdomain = $1", TENANT_COLUMNS);
        let row: Option<TenantRow> = sqlx::query_as(&query)
            .bind(subdomain)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Tenant::from))
    }

    async fn list_all(&self) -> DirectoryResult<Vec<Tenant>> {
        let query = format!("SELECT {} FROM tenants ORDER BY subdomain", TENANT_COLUMNS);
        let rows: Vec<TenantRow> = sqlx::query_as(&query).fetch_all(&self.pool).await?;

        Ok(rows.into_iter().map(Tenant::from).collect())
    }

    async fn insert(&self, tenant: NewTenant) -> DirectoryResult<Tenant> {
        let (primary, secondary, accent) = match tenant.theme {
            Some(theme) => (Some(theme.primary), Some(theme.secondary), Some(theme.accent)),
            None => (None, None, None),
        };

        // Same subdomain replaces the existing record
        let query = format!(
            r#"
            INSERT INTO tenants ({columns})
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (subdomain) DO UPDATE SET
                name = EXCLUDED.name,
                logo = EXCLUDED.logo,
                theme_primary = EXCLUDED.theme_primary,
                theme_secondary = EXCLUDED.theme_secondary,
                theme_accent = EXCLUDED.theme_accent,
                title = EXCLUDED.title,
                description = EXCLUDED.description,
                custom_domain = EXCLUDED.custom_domain,
                updated_at = NOW()
            RETURNING {columns}
            "#,
            columns = TENANT_COLUMNS
        );

        let row: TenantRow = sqlx::query_as(&query)
            .bind(&tenant.subdomain)
            .bind(&tenant.name)
            .bind(&tenant.logo)
            .bind(primary)
            .bind(secondary)
            .bind(accent)
            .bind(&tenant.settings.title)
            .bind(&tenant.settings.description)
            .bind(&tenant.settings.custom_domain)
            .fetch_one(&self.pool)
            .await?;

        tracing::debug!(subdomain = %row.subdomain, "Tenant stored");
        Ok(row.into())
    }

    async fn ping(&self) -> DirectoryResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
