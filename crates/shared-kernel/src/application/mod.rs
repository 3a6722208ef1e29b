pub mod ports;

mod command;
mod query;

pub use command::CommandHandler;
pub use query::QueryHandler;
