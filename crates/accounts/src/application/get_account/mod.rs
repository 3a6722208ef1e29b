mod get_account_query;
mod get_account_use_case;

pub use get_account_query::GetAccountQuery;
pub use get_account_use_case::GetAccountUseCase;
