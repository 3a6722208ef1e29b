// crates/accounts/src/application/update_user/update_user_command.rs

use uuid::Uuid;
use crate::domain::models::UserData;
use crate::domain::value_objects::{DataPolicy, UserId};

#[derive(Debug, Clone)]
pub struct UpdateUserCommand {
    pub user_id: UserId,
    pub data: UserData,
    pub policy: DataPolicy,
    /// Reporté sur l'événement émis, pour relier la notification à la requête
    pub correlation_id: Option<Uuid>,
}

impl UpdateUserCommand {
    pub fn new(user_id: UserId, data: UserData, policy: DataPolicy) -> Self {
        Self { user_id, data, policy, correlation_id: None }
    }

    pub fn with_correlation_id(mut self, correlation_id: Uuid) -> Self {
        self.correlation_id = Some(correlation_id);
        self
    }
}
