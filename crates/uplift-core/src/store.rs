use crate::error::StoreError;
use async_trait::async_trait;
use uplift_model::completion::CompletionRecord;

pub mod loader;
pub mod memory;

pub use loader::LoaderCompletionStore;
pub use memory::MemoryCompletionStore;

/// Append-only persistence of section completions.
#[async_trait]
pub trait CompletionStore: Send + Sync {
    /// Every stored completion of the quest, in no particular order.
    async fn fetch_all(&self, quest_id: &str) -> Result<Vec<CompletionRecord>, StoreError>;

    /// Every stored completion across all quests. Progress needs the whole history because
    /// quests unlock each other.
    async fn fetch_every(&self, quest_ids: &[&str]) -> Result<Vec<CompletionRecord>, StoreError> {
        let mut records = vec![];
        for quest_id in quest_ids {
            records.extend(self.fetch_all(quest_id).await?);
        }
        Ok(records)
    }

    async fn save(&self, record: &CompletionRecord) -> Result<(), StoreError>;
}
