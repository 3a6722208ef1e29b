// crates/accounts/src/infrastructure/postgres/repositories/postgres_account_repository.rs

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{query, query_as, Pool, Postgres};
use shared_kernel::errors::{DomainError, Result};
use shared_kernel::infrastructure::postgres::mappers::SqlxErrorExt;

use crate::domain::models::UserData;
use crate::domain::repositories::AccountRepository;
use crate::domain::value_objects::UserId;
use crate::infrastructure::postgres::rows::PostgresAccountRow;

pub struct PostgresAccountRepository {
    pool: Pool<Postgres>,
}

impl PostgresAccountRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Option<UserData>> {
        let row = query_as::<_, PostgresAccountRow>("SELECT uid, data FROM accounts WHERE uid = $1")
            .bind(user_id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_domain_infra("Accounts: find_by_user_id")?;

        row.map(UserData::try_from).transpose()
    }

    async fn insert(&self, user_id: &UserId, data: &UserData) -> Result<()> {
        query("INSERT INTO accounts (uid, data) VALUES ($1, $2)")
            .bind(user_id.as_str())
            .bind(Json(data))
            .execute(&self.pool)
            .await
            .map_domain("Account", "uid")?;

        tracing::debug!("Account record inserted for {}", user_id);
        Ok(())
    }

    async fn update(&self, user_id: &UserId, data: &UserData) -> Result<()> {
        let result = query("UPDATE accounts SET data = $2 WHERE uid = $1")
            .bind(user_id.as_str())
            .bind(Json(data))
            .execute(&self.pool)
            .await
            .map_domain_infra("Accounts: update")?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                entity: "Account",
                id: user_id.to_string(),
            });
        }

        tracing::debug!("Account record updated for {}", user_id);
        Ok(())
    }
}
