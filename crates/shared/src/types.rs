//! Tenant records shared across the workspace

use serde::{Deserialize, Serialize};

// =============================================================================
// Branding
// =============================================================================

/// Default primary colour applied when a tenant is created without a theme
pub const DEFAULT_THEME_PRIMARY: &str = "#3B82F6";
/// Default secondary colour
pub const DEFAULT_THEME_SECONDARY: &str = "#1E40AF";
/// Default accent colour
pub const DEFAULT_THEME_ACCENT: &str = "#F59E0B";

/// Tenant branding colours
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantTheme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl TenantTheme {
    pub fn new(
        primary: impl Into<String>,
        secondary: impl Into<String>,
        accent: impl Into<String>,
    ) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
            accent: accent.into(),
        }
    }
}

impl Default for TenantTheme {
    fn default() -> Self {
        Self::new(
            DEFAULT_THEME_PRIMARY,
            DEFAULT_THEME_SECONDARY,
            DEFAULT_THEME_ACCENT,
        )
    }
}

// =============================================================================
// Settings
// =============================================================================

/// Per-tenant site settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantSettings {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub custom_domain: Option<String>,
}

impl TenantSettings {
    /// Settings given to a tenant created without any
    pub fn default_for(name: &str) -> Self {
        Self {
            title: format!("{} Dashboard", name),
            description: format!("Welcome to {}'s portal", name),
            custom_domain: None,
        }
    }
}

// =============================================================================
// Tenant
// =============================================================================

/// A tenant as stored in the directory.
///
/// `id` always equals `subdomain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: String,
    pub name: String,
    pub subdomain: String,
    pub logo: Option<String>,
    pub theme: Option<TenantTheme>,
    pub settings: TenantSettings,
}

impl Tenant {
    /// Theme to render with, falling back to the default colours
    pub fn effective_theme(&self) -> TenantTheme {
        self.theme.clone().unwrap_or_default()
    }
}

/// A tenant before the directory has assigned its identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTenant {
    pub name: String,
    pub subdomain: String,
    pub logo: Option<String>,
    pub theme: Option<TenantTheme>,
    pub settings: TenantSettings,
}

impl NewTenant {
    /// Build a tenant with the default theme and settings
    pub fn with_defaults(name: impl Into<String>, subdomain: impl Into<String>) -> Self {
        let name = name.into();
        let settings = TenantSettings::default_for(&name);
        Self {
            name,
            subdomain: subdomain.into(),
            logo: None,
            theme: Some(TenantTheme::default()),
            settings,
        }
    }

    /// Assign the identifier, which is the subdomain
    pub fn into_tenant(self) -> Tenant {
        Tenant {
            id: self.subdomain.clone(),
            name: self.name,
            subdomain: self.subdomain,
            logo: self.logo,
            theme: self.theme,
            settings: self.settings,
        }
    }
}
