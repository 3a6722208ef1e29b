// crates/shared-kernel/src/infrastructure/postgres/factories/postgres_factory.rs

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use crate::errors::{DomainError, Result};
use crate::infrastructure::postgres::factories::PostgresConfig;

pub async fn create_postgres_pool(config: &PostgresConfig) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.connect_timeout)
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::Infrastructure(format!("Failed to connect to Postgres: {}", e)))?;

    tracing::info!(
        "🐘 Postgres pool ready (max={}, min={})",
        config.max_connections,
        config.min_connections
    );

    Ok(pool)
}
