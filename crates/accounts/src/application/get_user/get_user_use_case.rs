// crates/accounts/src/application/get_user/get_user_use_case.rs

use std::sync::Arc;
use async_trait::async_trait;
use shared_kernel::application::QueryHandler;
use shared_kernel::errors::{DomainError, Result};

use crate::application::get_user::GetUserQuery;
use crate::domain::builders::UserDataBuilder;
use crate::domain::models::UserData;
use crate::domain::repositories::AccountRepository;
use crate::domain::value_objects::UserId;

/// Lecture du record d'un utilisateur. Le premier accès crée le record par défaut.
pub struct GetUserUseCase {
    account_repo: Arc<dyn AccountRepository>,
}

impl GetUserUseCase {
    pub fn new(account_repo: Arc<dyn AccountRepository>) -> Self {
        Self { account_repo }
    }

    pub async fn execute(&self, query: GetUserQuery) -> Result<UserData> {
        if let Some(data) = self.account_repo.find_by_user_id(&query.user_id).await? {
            return Ok(data.add_missing_default_values());
        }

        // Premier accès : le record par défaut est persisté, sans notification
        let defaults = UserDataBuilder::defaults();
        match self.account_repo.insert(&query.user_id, &defaults).await {
            Ok(()) => {
                tracing::info!("👤 Default account record created for {}", query.user_id);
                Ok(defaults)
            }
            // Un accès concurrent a créé le record entre la lecture et l'insertion
            Err(e) if e.is_already_exists() => {
                tracing::debug!("Account record for {} created concurrently, reloading", query.user_id);
                self.reload(&query.user_id).await
            }
            Err(e) => Err(e),
        }
    }

    async fn reload(&self, user_id: &UserId) -> Result<UserData> {
        self.account_repo
            .find_by_user_id(user_id)
            .await?
            .map(UserData::add_missing_default_values)
            .ok_or_else(|| DomainError::NotFound {
                entity: "Account",
                id: user_id.to_string(),
            })
    }
}

#[async_trait]
impl QueryHandler<GetUserQuery> for GetUserUseCase {
    type Output = UserData;

    async fn handle(&self, query: GetUserQuery) -> Result<UserData> {
        self.execute(query).await
    }
}
