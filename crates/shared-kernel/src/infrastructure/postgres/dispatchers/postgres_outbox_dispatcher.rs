// crates/shared-kernel/src/infrastructure/postgres/dispatchers/postgres_outbox_dispatcher.rs

use async_trait::async_trait;
use sqlx::PgPool;
use crate::application::ports::EventDispatcher;
use crate::domain::events::{DomainEvent, EventEnvelope};
use crate::errors::Result;
use crate::infrastructure::postgres::mappers::SqlxErrorExt;
use crate::infrastructure::postgres::rows::PendingOutboxRow;

/// Dispatcher qui persiste les événements dans la table outbox.
/// Un relais externe se charge ensuite de la publication.
pub struct PostgresOutboxDispatcher {
    pool: PgPool,
}

impl PostgresOutboxDispatcher {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Événements pas encore relayés, du plus ancien au plus récent
    pub async fn find_pending(&self, limit: i64) -> Result<Vec<EventEnvelope>> {
        let rows: Vec<PendingOutboxRow> = sqlx::query_as(
            r#"
            SELECT id, aggregate_type, aggregate_id, event_type, payload, correlation_id, occurred_at
            FROM outbox_events
            WHERE processed_at IS NULL
            ORDER BY occurred_at ASC, id ASC
            LIMIT $1
            "#,
        )
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_domain_infra("Outbox: find_pending")?;

        Ok(rows.into_iter().map(EventEnvelope::from).collect())
    }
}

#[async_trait]
impl EventDispatcher for PostgresOutboxDispatcher {
    async fn dispatch(&self, event: &dyn DomainEvent) -> Result<()> {
        let envelope = EventEnvelope::wrap(event);

        sqlx::query(
            r#"
            INSERT INTO outbox_events (id, aggregate_type, aggregate_id, event_type, payload, correlation_id, occurred_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
            .bind(envelope.id)
            .bind(&envelope.aggregate_type)
            .bind(&envelope.aggregate_id)
            .bind(&envelope.event_type)
            .bind(&envelope.payload)
            .bind(envelope.correlation_id)
            .bind(envelope.occurred_at)
            .execute(&self.pool)
            .await
            .map_domain_infra("Outbox: dispatch")?;

        tracing::debug!("📨 Event {} queued in outbox ({})", envelope.id, envelope.event_type);
        Ok(())
    }
}
