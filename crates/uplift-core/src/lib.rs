pub mod answers;
pub mod content;
pub mod error;
pub mod flow;
pub mod presenter;
pub mod progress;
pub mod scoring;
pub mod service;
pub mod store;

pub use answers::AnswerSet;
pub use content::{ContentSource, LazyContent};
pub use error::{ContentError, FlowError, ScoringError, ServiceError, StoreError};
pub use flow::{BackOutcome, FlowController, FlowState, FlowView, Phase};
pub use scoring::Outcome;
pub use service::{FinishedSection, FlowHandle, QuestService, SaveReceipt};
pub use store::CompletionStore;
