// crates/shared-kernel/src/infrastructure/postgres/utils/postgres_migrations.rs

use crate::errors::Result;
use crate::infrastructure::postgres::mappers::SqlxErrorExt;

/// Schéma du noyau (outbox). Idempotent : peut être rejoué à chaque démarrage.
pub async fn run_kernel_postgres_migrations(pool: &sqlx::PgPool) -> Result<()> {
    let schema = include_str!("../../../../migrations/postgres/202601010000_foundation.sql");
    sqlx::raw_sql(schema)
        .execute(pool)
        .await
        .map_domain_infra("Kernel migrations")?;
    tracing::info!("✅ Shared Kernel migrations applied");
    Ok(())
}
