// crates/shared-kernel/src/infrastructure/postgres/mappers/postgres_error_mapper.rs

use crate::errors::DomainError;

pub trait SqlxErrorExt<T> {
    /// Traduit les violations d'unicité en `AlreadyExists`, le reste en `Infrastructure`
    fn map_domain(self, entity: &'static str, field: &'static str) -> Result<T, DomainError>;
    fn map_domain_infra(self, context: &'static str) -> Result<T, DomainError>;
}

impl<T> SqlxErrorExt<T> for std::result::Result<T, sqlx::Error> {
    fn map_domain(self, entity: &'static str, field: &'static str) -> Result<T, DomainError> {
        self.map_err(|e| match e {
            sqlx::Error::RowNotFound => DomainError::NotFound {
                entity,
                id: "unknown".into(),
            },
            sqlx::Error::Database(db_err) => {
                // Violation d'unicité (Code Postgres 23505)
                if db_err.code().map(|c| c == "23505").unwrap_or(false) {
                    return DomainError::AlreadyExists {
                        entity,
                        field,
                        value: "already taken".into(),
                    };
                }

                DomainError::Infrastructure(db_err.message().into())
            }
            _ => DomainError::Infrastructure(e.to_string()),
        })
    }

    fn map_domain_infra(self, context: &'static str) -> Result<T, DomainError> {
        self.map_err(|e| DomainError::Infrastructure(format!("{}: {}", context, e)))
    }
}
