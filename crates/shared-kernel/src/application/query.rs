// crates/shared-kernel/src/application/query.rs

use crate::errors::Result;

#[async_trait::async_trait]
pub trait QueryHandler<Q: Send + 'static>: Send + Sync {
    type Output;
    async fn handle(&self, query: Q) -> Result<Self::Output>;
}
