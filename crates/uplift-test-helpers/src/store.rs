use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Semaphore;
use uplift_core::store::{CompletionStore, MemoryCompletionStore};
use uplift_core::StoreError;
use uplift_model::completion::CompletionRecord;

/// Store that is never reachable.
#[derive(Debug, Default)]
pub struct FailingStore {
    saves: AtomicUsize,
}

impl FailingStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attempted saves.
    #[must_use]
    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionStore for FailingStore {
    async fn fetch_all(&self, _quest_id: &str) -> Result<Vec<CompletionRecord>, StoreError> {
        Err(StoreError::Unavailable("store is offline".to_owned()))
    }

    async fn save(&self, _record: &CompletionRecord) -> Result<(), StoreError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Unavailable("store is offline".to_owned()))
    }
}

/// In-memory store whose saves wait until [`GatedStore::open`] is called.
#[derive(Debug, Clone)]
pub struct GatedStore {
    inner: MemoryCompletionStore,
    gate: Arc<Semaphore>,
}

impl GatedStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: MemoryCompletionStore::new(),
            gate: Arc::new(Semaphore::new(0)),
        }
    }

    /// Lets `saves` pending or future saves through.
    pub fn open(&self, saves: usize) {
        self.gate.add_permits(saves);
    }

    #[must_use]
    pub fn records(&self) -> &MemoryCompletionStore {
        &self.inner
    }
}

impl Default for GatedStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionStore for GatedStore {
    async fn fetch_all(&self, quest_id: &str) -> Result<Vec<CompletionRecord>, StoreError> {
        self.inner.fetch_all(quest_id).await
    }

    async fn save(&self, record: &CompletionRecord) -> Result<(), StoreError> {
        let permit = self
            .gate
            .acquire()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        permit.forget();
        self.inner.save(record).await
    }
}
