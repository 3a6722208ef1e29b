mod update_account_command;
mod update_account_use_case;
mod update_account_use_case_test;

pub use update_account_command::UpdateAccountCommand;
pub use update_account_use_case::UpdateAccountUseCase;
