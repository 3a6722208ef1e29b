// crates/shared-kernel/src/domain/events/event.rs

use dyn_clone::DynClone;

use std::borrow::Cow;
use std::fmt::Debug;
use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

pub trait DomainEvent: DynClone + Debug + Send + Sync {
    /// Identifiant unique de l'événement (pour l'idempotence)
    fn event_id(&self) -> Uuid {
        Uuid::now_v7()
    }

    /// Nom de l'événement (ex: "AccountManager::userUpdated")
    fn event_type(&self) -> Cow<'_, str>;

    /// Nom de l'agrégat (ex: "account")
    fn aggregate_type(&self) -> Cow<'_, str>;

    /// ID de l'agrégat (ex: l'uid de l'utilisateur)
    fn aggregate_id(&self) -> String;

    fn occurred_at(&self) -> DateTime<Utc>;

    /// Les données réelles en JSON
    fn payload(&self) -> Value;

    /// ID de corrélation pour le traçage distribué
    fn correlation_id(&self) -> Option<Uuid> {
        None
    }
}

dyn_clone::clone_trait_object!(DomainEvent);
