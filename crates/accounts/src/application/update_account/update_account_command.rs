// crates/accounts/src/application/update_account/update_account_command.rs

use uuid::Uuid;
use crate::domain::entities::Account;
use crate::domain::value_objects::DataPolicy;

#[derive(Debug, Clone)]
pub struct UpdateAccountCommand {
    pub account: Account,
    pub policy: DataPolicy,
    pub correlation_id: Option<Uuid>,
}

impl UpdateAccountCommand {
    pub fn new(account: Account, policy: DataPolicy) -> Self {
        Self { account, policy, correlation_id: None }
    }
}
