mod postgres_outbox_row;

pub use postgres_outbox_row::PendingOutboxRow;
