mod postgres_account_row;

pub use postgres_account_row::PostgresAccountRow;
