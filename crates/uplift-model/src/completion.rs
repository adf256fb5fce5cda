use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One answered question as it is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerEntry {
    pub question_index: usize,
    pub question_text: String,
    pub answer: String,
}

/// Proof that a section was finished, as handed to and read back from the completion store.
/// Records are append-only; a newer record for the same section supersedes older ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRecord {
    pub quest_id: String,
    pub section_id: String,
    pub section_title: String,
    pub answers: Vec<AnswerEntry>,
    pub completed_at_utc: DateTime<Utc>,
}
