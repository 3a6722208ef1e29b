mod postgres_config;
mod postgres_factory;

pub use postgres_config::PostgresConfig;
pub use postgres_factory::create_postgres_pool;
