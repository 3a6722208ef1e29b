// crates/accounts/src/domain/events/account_event.rs

use std::borrow::Cow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;
use shared_kernel::domain::events::DomainEvent;
use crate::domain::models::UserData;
use crate::domain::value_objects::UserId;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum AccountEvent {
    /// Émis une seule fois par insertion ou mise à jour effective du record
    UserUpdated {
        user_id: UserId,
        properties: UserData,
        occurred_at: DateTime<Utc>,
        /// Hors payload, porté par l'enveloppe
        #[serde(skip)]
        correlation_id: Option<Uuid>,
    },
}

impl DomainEvent for AccountEvent {
    fn event_type(&self) -> Cow<'_, str> {
        let s = match self {
            Self::UserUpdated { .. } => "AccountManager::userUpdated",
        };
        Cow::Borrowed(s)
    }

    fn aggregate_type(&self) -> Cow<'_, str> {
        Cow::Borrowed("account")
    }

    fn aggregate_id(&self) -> String {
        match self {
            Self::UserUpdated { user_id, .. } => user_id.to_string(),
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            Self::UserUpdated { occurred_at, .. } => *occurred_at,
        }
    }

    fn correlation_id(&self) -> Option<Uuid> {
        match self {
            Self::UserUpdated { correlation_id, .. } => *correlation_id,
        }
    }

    fn payload(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
