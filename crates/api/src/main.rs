//! Tenancy API server
//!
//! Serves tenant sections by subdomain and the tenant directory API.

use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use tenancy_api::{config::LogFormat, routes::create_router, AppState, Config};
use tenancy_shared::{create_pool, run_migrations, InMemoryDirectory, PgDirectory, TenantDirectory};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(config.log_format);

    tracing::info!(bind_address = %config.bind_address, "tenancy-api starting");

    let directory = build_directory(&config).await?;
    let bind_address = config.bind_address.clone();
    let cleanup_period = config.tenant_cache_ttl.max(Duration::from_secs(1));
    let state = AppState::new(config, directory);
    state.tenant_cache.spawn_cleanup(cleanup_period);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    tracing::info!("Listening on {}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("tenancy-api stopped");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tenancy_api=info,tower_http=info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

/// PostgreSQL when `DATABASE_URL` is set, otherwise an in-memory directory
async fn build_directory(config: &Config) -> Result<Arc<dyn TenantDirectory>> {
    match &config.database_url {
        Some(url) => {
            let pool = create_pool(url, config.database_max_connections)
                .await
                .context("Failed to connect to database")?;
            if config.run_migrations {
                run_migrations(&pool)
                    .await
                    .context("Failed to run migrations")?;
                tracing::info!("Database migrations applied");
            }
            tracing::info!("Using PostgreSQL tenant directory");
            Ok(Arc::new(PgDirectory::new(pool)))
        }
        None => {
            let directory = if config.seed_demo_tenants {
                InMemoryDirectory::with_demo_tenants()
            } else {
                InMemoryDirectory::new()
            };
            tracing::info!(tenants = directory.len(), "Using in-memory tenant directory");
            Ok(Arc::new(directory))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
