// crates/accounts/src/infrastructure/postgres/rows/postgres_account_row.rs

use serde_json::Value;
use sqlx::types::Json;
use shared_kernel::errors::{internal_err, Result};
use crate::domain::models::UserData;

#[derive(Debug, sqlx::FromRow)]
pub struct PostgresAccountRow {
    pub uid: String,
    pub data: Json<Value>,
}

impl TryFrom<PostgresAccountRow> for UserData {
    type Error = shared_kernel::errors::DomainError;

    fn try_from(row: PostgresAccountRow) -> Result<Self> {
        serde_json::from_value(row.data.0)
            .map_err(|e| internal_err(format!("Corrupted account record for '{}': {}", row.uid, e)))
    }
}
