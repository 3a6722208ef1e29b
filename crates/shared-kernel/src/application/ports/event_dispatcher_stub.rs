// crates/shared-kernel/src/application/ports/event_dispatcher_stub.rs

use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use crate::application::ports::EventDispatcher;
use crate::domain::events::{DomainEvent, EventEnvelope};
use crate::errors::{DomainError, Result};

#[derive(Default)]
pub struct EventDispatcherStub {
    /// Enveloppes reçues, dans l'ordre d'émission
    pub dispatched: Arc<Mutex<Vec<EventEnvelope>>>,
    /// Permet de simuler une panne du bus
    pub error_to_return: Arc<Mutex<Option<DomainError>>>,
}

impl EventDispatcherStub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatched_count(&self) -> usize {
        self.dispatched.lock().unwrap().len()
    }

    pub fn last(&self) -> Option<EventEnvelope> {
        self.dispatched.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl EventDispatcher for EventDispatcherStub {
    async fn dispatch(&self, event: &dyn DomainEvent) -> Result<()> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        self.dispatched.lock().unwrap().push(EventEnvelope::wrap(event));
        Ok(())
    }
}
