// crates/accounts/src/infrastructure/postgres/bootstrap.rs

use std::sync::Arc;
use sqlx::PgPool;
use shared_kernel::application::ports::ConfigProvider;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::dispatchers::PostgresOutboxDispatcher;
use shared_kernel::infrastructure::postgres::factories::{create_postgres_pool, PostgresConfig};
use shared_kernel::infrastructure::postgres::mappers::SqlxErrorExt;
use shared_kernel::infrastructure::postgres::utils::run_kernel_postgres_migrations;

use crate::infrastructure::postgres::repositories::PostgresAccountRepository;

/// Schéma du module. Idempotent, rejoué à chaque démarrage.
pub async fn run_accounts_postgres_migrations(pool: &PgPool) -> Result<()> {
    let schema = include_str!("../../../migrations/postgres/202601020000_create_accounts.sql");
    sqlx::raw_sql(schema)
        .execute(pool)
        .await
        .map_domain_infra("Accounts migrations")?;
    tracing::info!("✅ Accounts migrations applied");
    Ok(())
}

/// Adaptateurs Postgres prêts à être injectés dans les use cases
pub struct PostgresAccountStore {
    pub pool: PgPool,
    pub repository: Arc<PostgresAccountRepository>,
    pub dispatcher: Arc<PostgresOutboxDispatcher>,
}

impl PostgresAccountStore {
    /// 1. Pool depuis la config (`database_url`...), 2. schémas noyau + module, 3. adaptateurs
    pub async fn connect(config: &dyn ConfigProvider) -> Result<Self> {
        let pg_config = PostgresConfig::from_provider(config)?;
        let pool = create_postgres_pool(&pg_config).await?;

        run_kernel_postgres_migrations(&pool).await?;
        run_accounts_postgres_migrations(&pool).await?;

        Ok(Self::from_pool(pool))
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            repository: Arc::new(PostgresAccountRepository::new(pool.clone())),
            dispatcher: Arc::new(PostgresOutboxDispatcher::new(pool.clone())),
            pool,
        }
    }
}
