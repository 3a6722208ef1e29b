mod update_user_command;
mod update_user_use_case;

pub use update_user_command::UpdateUserCommand;
pub use update_user_use_case::UpdateUserUseCase;
