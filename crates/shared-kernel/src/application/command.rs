// crates/shared-kernel/src/application/command.rs

use crate::errors::Result;

/// Point d'entrée uniforme des use cases qui modifient l'état
#[async_trait::async_trait]
pub trait CommandHandler<C: Send + 'static>: Send + Sync {
    type Output;
    async fn handle(&self, command: C) -> Result<Self::Output>;
}
