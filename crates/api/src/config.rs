//! Application configuration

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Path prefixes (without the leading `/`) that bypass tenant routing
pub const DEFAULT_EXCLUDED_PREFIXES: &[&str] =
    &["api", "_next/static", "_next/image", "favicon.ico", "health"];

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(()),
        }
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub bind_address: String,
    pub base_domain: String, // e.g., "yourdomain.com" for *.yourdomain.com tenants

    // Database (unset means the in-memory directory)
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub run_migrations: bool,
    pub seed_demo_tenants: bool,

    // Routing
    pub excluded_prefixes: Vec<String>,
    pub tenant_cache_ttl: Duration,

    // Logging
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            base_domain: "yourdomain.com".to_string(),
            database_url: None,
            database_max_connections: 5,
            run_migrations: true,
            seed_demo_tenants: true,
            excluded_prefixes: DEFAULT_EXCLUDED_PREFIXES
                .iter()
                .map(|p| p.to_string())
                .collect(),
            tenant_cache_ttl: Duration::from_secs(300),
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let database_max_connections: u32 =
            parse_var("DATABASE_MAX_CONNECTIONS", defaults.database_max_connections)?;
        if database_max_connections == 0 {
            return Err(ConfigError::Invalid(
                "DATABASE_MAX_CONNECTIONS",
                "must be greater than zero".to_string(),
            ));
        }

        let excluded_prefixes = match env::var("ROUTING_EXCLUDED_PREFIXES") {
            Ok(raw) => parse_prefix_list(&raw),
            Err(_) => defaults.excluded_prefixes,
        };

        let log_format = match env::var("LOG_FORMAT") {
            Ok(raw) => raw.parse().map_err(|_| {
                ConfigError::Invalid("LOG_FORMAT", format!("expected 'text' or 'json', got '{}'", raw))
            })?,
            Err(_) => defaults.log_format,
        };

        Ok(Self {
            // Server
            bind_address: env::var("BIND_ADDRESS").unwrap_or(defaults.bind_address),
            base_domain: env::var("BASE_DOMAIN").unwrap_or(defaults.base_domain),

            // Database
            database_url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            database_max_connections,
            run_migrations: parse_var("RUN_MIGRATIONS", defaults.run_migrations)?,
            seed_demo_tenants: parse_var("SEED_DEMO_TENANTS", defaults.seed_demo_tenants)?,

            // Routing
            excluded_prefixes,
            tenant_cache_ttl: Duration::from_secs(parse_var(
                "TENANT_CACHE_TTL_SECS",
                defaults.tenant_cache_ttl.as_secs(),
            )?),

            log_format,
        })
    }
}

/// Parse an optional variable, falling back to `default` when unset
fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(name, format!("cannot parse '{}'", raw))),
        Err(_) => Ok(default),
    }
}

/// Split a comma list, trimming whitespace and leading slashes
fn parse_prefix_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|p| p.trim().trim_start_matches('/'))
        .filter(|p| !p.is_empty())
        .map(|p| p.to_string())
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "BIND_ADDRESS",
        "BASE_DOMAIN",
        "DATABASE_URL",
        "DATABASE_MAX_CONNECTIONS",
        "RUN_MIGRATIONS",
        "SEED_DEMO_TENANTS",
        "ROUTING_EXCLUDED_PREFIXES",
        "TENANT_CACHE_TTL_SECS",
        "LOG_FORMAT",
    ];

    /// Helper to clear env vars before and after tests
    fn cleanup_config() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_when_unset() {
        cleanup_config();

        let config = Config::from_env().unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:3000");
        assert_eq!(config.base_domain, "yourdomain.com");
        assert!(config.database_url.is_none());
        assert_eq!(config.database_max_connections, 5);
        assert!(config.seed_demo_tenants);
        assert_eq!(config.tenant_cache_ttl, Duration::from_secs(300));
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(
            config.excluded_prefixes,
            vec!["api", "_next/static", "_next/image", "favicon.ico", "health"]
        );
    }

    #[test]
    #[serial]
    fn test_overrides_from_env() {
        cleanup_config();
        env::set_var("BIND_ADDRESS", "127.0.0.1:8080");
        env::set_var("BASE_DOMAIN", "example.com");
        env::set_var("DATABASE_URL", "postgres://localhost/tenancy");
        env::set_var("DATABASE_MAX_CONNECTIONS", "12");
        env::set_var("SEED_DEMO_TENANTS", "false");
        env::set_var("ROUTING_EXCLUDED_PREFIXES", " /api , static,, favicon.ico ");
        env::set_var("TENANT_CACHE_TTL_SECS", "30");
        env::set_var("LOG_FORMAT", "JSON");

        let config = Config::from_env().unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:8080");
        assert_eq!(config.base_domain, "example.com");
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/tenancy")
        );
        assert_eq!(config.database_max_connections, 12);
        assert!(!config.seed_demo_tenants);
        assert_eq!(config.excluded_prefixes, vec!["api", "static", "favicon.ico"]);
        assert_eq!(config.tenant_cache_ttl, Duration::from_secs(30));
        assert_eq!(config.log_format, LogFormat::Json);

        cleanup_config();
    }

    #[test]
    #[serial]
    fn test_invalid_values_rejected() {
        cleanup_config();

        env::set_var("DATABASE_MAX_CONNECTIONS", "lots");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid("DATABASE_MAX_CONNECTIONS", _))
        ));

        env::set_var("DATABASE_MAX_CONNECTIONS", "0");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid("DATABASE_MAX_CONNECTIONS", _))
        ));
        env::remove_var("DATABASE_MAX_CONNECTIONS");

        env::set_var("SEED_DEMO_TENANTS", "maybe");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid("SEED_DEMO_TENANTS", _))
        ));
        env::remove_var("SEED_DEMO_TENANTS");

        env::set_var("LOG_FORMAT", "xml");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid("LOG_FORMAT", _))
        ));

        cleanup_config();
    }

    #[test]
    #[serial]
    fn test_empty_database_url_means_in_memory() {
        cleanup_config();
        env::set_var("DATABASE_URL", "");

        let config = Config::from_env().unwrap();
        assert!(config.database_url.is_none());

        cleanup_config();
    }
}
