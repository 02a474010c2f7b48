//! Postgres pool for calculation history.
//!
//! The database only backs history reads and the fire-and-forget saves
//! spawned after a calculation, so the pool stays small and gives up on
//! acquisition quickly instead of queueing work behind a slow database.
//! Calculations never touch the pool.

use anyhow::Result;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

/// Pool settings tuned for light, bursty history traffic.
pub struct PoolSettings {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 5,
            // A save that cannot get a connection in 5s is dropped with
            // a warning rather than held; history is best-effort.
            acquire_timeout_secs: 5,
            idle_timeout_secs: 300,
        }
    }
}

/// Create the history pool. No minimum connection count: the service is
/// useful with zero warm connections and reconnects on demand.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool> {
    let settings = PoolSettings {
        url: database_url.to_string(),
        max_connections,
        ..Default::default()
    };
    create_pool_with_settings(&settings).await
}

pub async fn create_pool_with_settings(settings: &PoolSettings) -> Result<PgPool> {
    let connect_options = PgConnectOptions::from_str(&settings.url)?
        .application_name("fittools");

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(settings.idle_timeout_secs))
        .test_before_acquire(true)
        .connect_with(connect_options)
        .await?;

    info!(
        "History pool created: max={}, acquire_timeout={}s",
        settings.max_connections, settings.acquire_timeout_secs
    );

    Ok(pool)
}

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations completed successfully");
    Ok(())
}

/// Check database health
pub async fn health_check(pool: &PgPool) -> Result<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(|e| {
            warn!("Database health check failed: {}", e);
            e.into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pool_settings() {
        let settings = PoolSettings::default();
        assert_eq!(settings.max_connections, 5);
        assert_eq!(settings.acquire_timeout_secs, 5);
        assert_eq!(settings.idle_timeout_secs, 300);
    }
}
