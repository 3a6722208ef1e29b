// crates/shared-kernel/src/domain/events/envelope.rs

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;
use crate::domain::events::DomainEvent;
use crate::errors::Result;

/// Forme figée d'un événement, telle qu'elle part vers l'outbox.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EventEnvelope {
    pub id: Uuid,
    pub aggregate_type: String,
    pub aggregate_id: String,
    pub event_type: String,
    pub payload: Value,
    pub occurred_at: DateTime<Utc>,
    pub correlation_id: Option<Uuid>,
}

impl EventEnvelope {
    pub fn wrap(event: &dyn DomainEvent) -> Self {
        Self {
            id: event.event_id(),
            aggregate_type: event.aggregate_type().into_owned(),
            aggregate_id: event.aggregate_id(),
            event_type: event.event_type().into_owned(),
            payload: event.payload(),
            occurred_at: event.occurred_at(),
            correlation_id: event.correlation_id(),
        }
    }

    /// Relit le payload sous sa forme typée (côté consommateur)
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.payload.clone())?)
    }
}
