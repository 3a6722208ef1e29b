// crates/accounts/src/application/get_user/get_user_query.rs

use crate::domain::value_objects::UserId;

#[derive(Debug, Clone)]
pub struct GetUserQuery {
    pub user_id: UserId,
}
