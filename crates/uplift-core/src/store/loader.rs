use crate::error::StoreError;
use crate::store::CompletionStore;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::sync::Mutex;
use uplift_model::completion::CompletionRecord;
use uplift_utils::loader::error::LoadingError;
use uplift_utils::loader::{Loader, LoaderTrait};

/// Stores completions as one JSON array per quest at `completions/<quest>.json`.
#[derive(Debug)]
pub struct LoaderCompletionStore {
    loader: Loader,
    // Serializes read-modify-write cycles of `save`
    write_lock: Mutex<()>,
}

impl LoaderCompletionStore {
    #[must_use]
    pub fn new(loader: Loader) -> Self {
        Self {
            loader,
            write_lock: Mutex::new(()),
        }
    }

    fn path(quest_id: &str) -> PathBuf {
        PathBuf::from("completions").join(format!("{quest_id}.json"))
    }

    async fn read(&self, quest_id: &str) -> Result<Vec<CompletionRecord>, StoreError> {
        match self.loader.load_file(Self::path(quest_id)).await {
            Ok(file) => Ok(serde_json::from_slice(&file.content)?),
            Err(LoadingError::NotFound(_)) => Ok(vec![]),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl CompletionStore for LoaderCompletionStore {
    async fn fetch_all(&self, quest_id: &str) -> Result<Vec<CompletionRecord>, StoreError> {
        let records = self.read(quest_id).await?;
        tracing::debug!(quest_id, records = records.len(), "fetched completions");
        Ok(records)
    }

    async fn save(&self, record: &CompletionRecord) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.read(&record.quest_id).await?;
        records.push(record.clone());
        let content = serde_json::to_vec_pretty(&records)?;
        self.loader.store_file(Self::path(&record.quest_id), &content).await?;
        tracing::debug!(
            quest_id = record.quest_id,
            section_id = record.section_id,
            "stored completion"
        );
        Ok(())
    }
}
