//! Entry point for UIs: opens section flows, finishes them and reports progress.

use crate::content::ContentSource;
use crate::error::{FlowError, ServiceError, StoreError};
use crate::flow::{BackOutcome, FlowController, FlowView};
use crate::presenter::{self, Presentation};
use crate::progress;
use crate::scoring::Outcome;
use crate::store::CompletionStore;
use chrono::Utc;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::{Mutex, MutexGuard};
use tokio::task::JoinHandle;
use uplift_model::completion::CompletionRecord;
use uplift_model::progress::QuestProgress;
use uplift_model::result::DisplayResult;

/// One UI session's flow. Calls never wait on each other: a call made while another is still
/// running on the same flow fails with [`FlowError::Busy`].
#[derive(Debug, Clone)]
pub struct FlowHandle {
    flow: Arc<Mutex<FlowController>>,
}

impl FlowHandle {
    fn new(flow: FlowController) -> Self {
        Self {
            flow: Arc::new(Mutex::new(flow)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, FlowController>, FlowError> {
        self.flow.try_lock().map_err(|_| FlowError::Busy)
    }

    pub fn view(&self) -> Result<FlowView, FlowError> {
        Ok(self.lock()?.view())
    }

    pub fn submit_answer(&self, token: &str) -> Result<FlowView, FlowError> {
        self.lock()?.submit_answer(token)
    }

    pub fn go_back(&self) -> Result<BackOutcome, FlowError> {
        self.lock()?.go_back()
    }

    /// Discards the flow. Nothing is saved for an unfinished section.
    pub fn close(self) {
        if let Ok(flow) = self.flow.try_lock() {
            tracing::debug!(
                quest_id = flow.quest_id(),
                section_id = flow.section().id(),
                phase = ?flow.state().phase(),
                "flow closed"
            );
        }
    }
}

/// Pending save of a completion. The save runs whether or not this is awaited.
#[derive(Debug)]
pub struct SaveReceipt(JoinHandle<Result<(), StoreError>>);

impl SaveReceipt {
    pub async fn wait(self) -> Result<(), StoreError> {
        match self.0.await {
            Ok(result) => result,
            Err(e) => Err(StoreError::Unavailable(format!("save task failed: {e}"))),
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.0.is_finished()
    }
}

#[derive(Debug)]
pub struct FinishedSection {
    pub outcome: Outcome,
    pub record: CompletionRecord,
    pub display: DisplayResult,
    pub receipt: SaveReceipt,
}

#[derive(Clone)]
pub struct QuestService {
    content: Arc<dyn ContentSource>,
    store: Arc<dyn CompletionStore>,
}

impl QuestService {
    pub fn new(content: Arc<dyn ContentSource>, store: Arc<dyn CompletionStore>) -> Self {
        Self { content, store }
    }

    pub async fn start_section(&self, quest_id: &str, section_id: &str) -> Result<FlowHandle, ServiceError> {
        let section = self
            .content
            .section(quest_id, section_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound {
                quest_id: quest_id.to_owned(),
                section_id: section_id.to_owned(),
            })?;
        let mut flow = FlowController::new(quest_id, section);
        flow.start()?;
        Ok(FlowHandle::new(flow))
    }

    /// Scores the fully answered section and hands the completion to the store in the background.
    ///
    /// The result is returned without waiting for the save. A failed save is logged as an error
    /// and reported through the receipt; the result stays valid either way.
    ///
    /// Must be called from within a Tokio runtime. Outside of one the flow is left untouched and
    /// [`FlowError::NoRuntime`] is returned.
    pub fn finish(&self, handle: &FlowHandle) -> Result<FinishedSection, FlowError> {
        let runtime = Handle::try_current().map_err(|_| FlowError::NoRuntime)?;
        let mut flow = handle.lock()?;
        let outcome = flow.finish_scoring()?;
        let Presentation { record, display } =
            presenter::present(flow.quest_id(), flow.section(), flow.answers(), &outcome, Utc::now());
        drop(flow);

        let receipt = self.spawn_save(&runtime, record.clone());
        Ok(FinishedSection {
            outcome,
            record,
            display,
            receipt,
        })
    }

    fn spawn_save(&self, runtime: &Handle, record: CompletionRecord) -> SaveReceipt {
        let store = Arc::clone(&self.store);
        SaveReceipt(runtime.spawn(async move {
            match store.save(&record).await {
                Ok(()) => {
                    tracing::debug!(
                        quest_id = record.quest_id,
                        section_id = record.section_id,
                        "completion saved"
                    );
                    Ok(())
                }
                Err(error) => {
                    tracing::error!(
                        quest_id = record.quest_id,
                        section_id = record.section_id,
                        %error,
                        "failed to save completion"
                    );
                    Err(error)
                }
            }
        }))
    }

    /// Progress of `quest_id`. When completions cannot be fetched this falls back to the
    /// default progress marked as degraded instead of failing.
    pub async fn get_progress(&self, quest_id: &str) -> Result<QuestProgress, ServiceError> {
        let catalog = self.content.catalog().await?;
        let quest_ids: Vec<&str> = catalog.quests().map(|q| q.id.as_str()).collect();
        match self.store.fetch_every(&quest_ids).await {
            Ok(records) => Ok(progress::compute(&catalog, quest_id, &records)),
            Err(error) => {
                tracing::warn!(quest_id, %error, "completions unavailable, reporting default progress");
                Ok(progress::degraded(&catalog, quest_id))
            }
        }
    }
}
