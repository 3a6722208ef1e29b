mod account;
mod account_property;

pub use account::Account;
pub use account_property::AccountProperty;
