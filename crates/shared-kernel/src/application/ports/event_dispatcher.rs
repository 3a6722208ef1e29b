// crates/shared-kernel/src/application/ports/event_dispatcher.rs

use crate::domain::events::DomainEvent;
use crate::errors::Result;
use async_trait::async_trait;

#[async_trait]
pub trait EventDispatcher: Send + Sync {
    /// Publie un événement métier vers les abonnés (outbox, bus en mémoire...).
    /// Appelé au plus une fois par modification effective.
    async fn dispatch(&self, event: &dyn DomainEvent) -> Result<()>;
}
