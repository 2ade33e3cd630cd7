use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::AppResult;
use crate::models::StoredResult;

/// Hand-off point for the most recently submitted ranking
///
/// Only one result is kept: storing replaces whatever was there before.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ResultStore: Send + Sync {
    /// Replaces the stored result
    async fn store(&self, result: StoredResult) -> AppResult<()>;

    /// Returns the stored result, if anything has been submitted yet
    async fn latest(&self) -> AppResult<Option<StoredResult>>;
}

/// Process-local single slot guarded by a read-write lock
#[derive(Clone, Default)]
pub struct InMemoryResultStore {
    slot: Arc<RwLock<Option<StoredResult>>>,
}

impl InMemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ResultStore for InMemoryResultStore {
    async fn store(&self, result: StoredResult) -> AppResult<()> {
        let mut slot = self.slot.write().await;
        *slot = Some(result);
        Ok(())
    }

    async fn latest(&self) -> AppResult<Option<StoredResult>> {
        Ok(self.slot.read().await.clone())
    }
}
