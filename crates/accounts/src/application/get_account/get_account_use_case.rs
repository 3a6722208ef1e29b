// crates/accounts/src/application/get_account/get_account_use_case.rs

use std::sync::Arc;
use async_trait::async_trait;
use shared_kernel::application::QueryHandler;
use shared_kernel::errors::Result;

use crate::application::get_account::GetAccountQuery;
use crate::application::get_user::{GetUserQuery, GetUserUseCase};
use crate::domain::entities::Account;
use crate::domain::repositories::AccountRepository;

pub struct GetAccountUseCase {
    get_user: GetUserUseCase,
}

impl GetAccountUseCase {
    pub fn new(account_repo: Arc<dyn AccountRepository>) -> Self {
        Self { get_user: GetUserUseCase::new(account_repo) }
    }

    pub async fn execute(&self, query: GetAccountQuery) -> Result<Account> {
        let data = self.get_user.execute(GetUserQuery { user_id: query.user_id.clone() }).await?;
        Account::from_user_data(query.user_id, &data)
    }
}

#[async_trait]
impl QueryHandler<GetAccountQuery> for GetAccountUseCase {
    type Output = Account;

    async fn handle(&self, query: GetAccountQuery) -> Result<Account> {
        self.execute(query).await
    }
}
