// crates/accounts/tests/common/setup_postgres_test_db.rs

use sqlx::PgPool;
use testcontainers::ContainerAsync;
use testcontainers_modules::postgres::Postgres as PostgresImage;
use shared_kernel::infrastructure::postgres::utils::setup_test_postgres;

pub async fn setup_postgres_test_db() -> (PgPool, ContainerAsync<PostgresImage>) {
    // Plusieurs tests partagent le binaire : seul le premier installe le subscriber
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    setup_test_postgres(&[
        "./migrations/postgres"
    ]).await
}
