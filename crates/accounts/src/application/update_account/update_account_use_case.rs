// crates/accounts/src/application/update_account/update_account_use_case.rs

use std::sync::Arc;
use async_trait::async_trait;
use shared_kernel::application::CommandHandler;
use shared_kernel::errors::Result;

use crate::application::update_account::UpdateAccountCommand;
use crate::application::update_user::{UpdateUserCommand, UpdateUserUseCase};
use crate::domain::entities::Account;

/// Persiste un `Account` en le ramenant à sa forme stockée.
pub struct UpdateAccountUseCase {
    update_user: Arc<UpdateUserUseCase>,
}

impl UpdateAccountUseCase {
    pub fn new(update_user: Arc<UpdateUserUseCase>) -> Self {
        Self { update_user }
    }

    pub async fn execute(&self, cmd: UpdateAccountCommand) -> Result<Account> {
        let user_id = cmd.account.user_id().clone();

        let saved = self.update_user
            .execute(UpdateUserCommand {
                user_id: user_id.clone(),
                data: cmd.account.to_user_data(),
                policy: cmd.policy,
                correlation_id: cmd.correlation_id,
            })
            .await?;

        Account::from_user_data(user_id, &saved)
    }
}

#[async_trait]
impl CommandHandler<UpdateAccountCommand> for UpdateAccountUseCase {
    type Output = Account;

    async fn handle(&self, command: UpdateAccountCommand) -> Result<Account> {
        self.execute(command).await
    }
}
