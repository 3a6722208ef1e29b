mod account_repository_it;
mod bootstrap_it;
mod update_user_it;
