use crate::error::StoreError;
use crate::store::CompletionStore;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uplift_model::completion::CompletionRecord;

/// Completion store kept in process memory. Clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct MemoryCompletionStore {
    records: Arc<RwLock<Vec<CompletionRecord>>>,
}

impl MemoryCompletionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_records(records: Vec<CompletionRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl CompletionStore for MemoryCompletionStore {
    async fn fetch_all(&self, quest_id: &str) -> Result<Vec<CompletionRecord>, StoreError> {
        let records = self.records.read().await;
        Ok(records.iter().filter(|r| r.quest_id == quest_id).cloned().collect())
    }

    async fn save(&self, record: &CompletionRecord) -> Result<(), StoreError> {
        self.records.write().await.push(record.clone());
        Ok(())
    }
}
