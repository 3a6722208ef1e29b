// crates/shared-kernel/src/infrastructure/postgres/rows/postgres_outbox_row.rs

use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;
use crate::domain::events::EventEnvelope;

/// Ligne `outbox_events` encore en attente de relais
#[derive(FromRow)]
pub struct PendingOutboxRow {
    id: Uuid,
    aggregate_type: String,
    aggregate_id: String,
    event_type: String,
    payload: Value,
    correlation_id: Option<Uuid>,
    occurred_at: DateTime<Utc>,
}

impl From<PendingOutboxRow> for EventEnvelope {
    fn from(row: PendingOutboxRow) -> Self {
        let PendingOutboxRow { id, aggregate_type, aggregate_id, event_type, payload, correlation_id, occurred_at } = row;
        Self { id, aggregate_type, aggregate_id, event_type, payload, occurred_at, correlation_id }
    }
}
