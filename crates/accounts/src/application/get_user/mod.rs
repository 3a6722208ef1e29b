mod get_user_query;
mod get_user_use_case;

pub use get_user_query::GetUserQuery;
pub use get_user_use_case::GetUserUseCase;
