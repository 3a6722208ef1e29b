// crates/accounts/src/application/get_account/get_account_query.rs

use crate::domain::value_objects::UserId;

#[derive(Debug, Clone)]
pub struct GetAccountQuery {
    pub user_id: UserId,
}
