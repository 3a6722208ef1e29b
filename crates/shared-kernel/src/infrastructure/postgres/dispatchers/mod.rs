mod postgres_outbox_dispatcher;

pub use postgres_outbox_dispatcher::PostgresOutboxDispatcher;
