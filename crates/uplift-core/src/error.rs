use crate::flow::Phase;
use thiserror::Error;
use uplift_config::{AnswerError, CatalogError};
use uplift_utils::loader::error::LoadingError;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("Section `{section}` has no questions.")]
    EmptySection { section: String },

    #[error("Answer to question {question_index} was rejected: {reason}")]
    InvalidAnswer {
        question_index: usize,
        #[source]
        reason: AnswerError,
    },

    #[error("Cannot {action} while the flow is {phase:?}.")]
    InvalidTransition { action: &'static str, phase: Phase },

    #[error("Another call on this flow is still in progress.")]
    Busy,

    #[error("No Tokio runtime is available to save the completion.")]
    NoRuntime,

    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScoringError {
    #[error("Cannot score a section without answers.")]
    EmptyAnswerSet,

    #[error("No answer voted for any category.")]
    NoVotes,

    #[error("Answer to question {question_index} votes for undeclared category `{category}`.")]
    UnknownCategory { question_index: usize, category: String },
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Content unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Loading(#[from] LoadingError),

    #[error("Stored completions are malformed")]
    Json(#[from] serde_json::Error),

    #[error("Completion store unavailable: {0}")]
    Unavailable(String),

    #[error("Remote store failed: {0}")]
    Remote(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Section `{section_id}` of quest `{quest_id}` was not found.")]
    NotFound { quest_id: String, section_id: String },

    #[error("Unable to load content: {0}")]
    ContentUnavailable(#[from] ContentError),

    #[error(transparent)]
    Flow(#[from] FlowError),
}
