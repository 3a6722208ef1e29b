// crates/shared-kernel/src/infrastructure/postgres/factories/postgres_config.rs

use std::time::Duration;
use crate::application::ports::ConfigProvider;
use crate::errors::{DomainError, Result};

#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
}

impl PostgresConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 20,
            min_connections: 5,
            connect_timeout: Duration::from_secs(3),
        }
    }

    /// Charge la config via le provider (clés `database_url`, `database_max_connections`...)
    pub fn from_provider(config: &dyn ConfigProvider) -> Result<Self> {
        let url = config.get_string("database_url").ok_or_else(|| DomainError::Validation {
            field: "database_url",
            reason: "database_url must be set".into(),
        })?;

        let mut pg = Self::new(url);

        if let Some(max) = config.get_string("database_max_connections").and_then(|v| v.parse().ok()) {
            pg.max_connections = max;
        }
        if let Some(min) = config.get_string("database_min_connections").and_then(|v| v.parse().ok()) {
            pg.min_connections = min;
        }
        if let Some(secs) = config.get_string("database_connect_timeout_secs").and_then(|v| v.parse().ok()) {
            pg.connect_timeout = Duration::from_secs(secs);
        }

        Ok(pg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::StaticConfigProvider;

    #[test]
    fn test_from_provider_overrides_defaults() {
        let config = StaticConfigProvider::new()
            .with("database_url", "postgres://localhost/accounts")
            .with("database_max_connections", "8")
            .with("database_connect_timeout_secs", "not-a-number");

        let pg = PostgresConfig::from_provider(&config).unwrap();
        assert_eq!(pg.url, "postgres://localhost/accounts");
        assert_eq!(pg.max_connections, 8);
        assert_eq!(pg.min_connections, 5);
        assert_eq!(pg.connect_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_from_provider_requires_url() {
        let result = PostgresConfig::from_provider(&StaticConfigProvider::new());
        assert!(matches!(result, Err(DomainError::Validation { field: "database_url", .. })));
    }
}
