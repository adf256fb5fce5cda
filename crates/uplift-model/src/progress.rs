use chrono::{DateTime, Utc};
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

/// Progress of one quest, derived on demand from the completion records of the whole catalog.
/// Id sets are in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestProgress {
    pub quest_id: String,
    pub quest_unlocked: bool,
    pub quest_completed: bool,
    pub completed_section_ids: IndexSet<String>,
    pub unlocked_section_ids: IndexSet<String>,
    /// Time of the most recent completion per completed section.
    pub last_completed: IndexMap<String, DateTime<Utc>>,
    pub completed_quest_ids: IndexSet<String>,
    pub badge_earned: bool,
    /// Set when completions could not be fetched and this is the empty default.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub degraded: bool,
}

impl QuestProgress {
    #[must_use]
    pub fn is_section_completed(&self, section_id: &str) -> bool {
        self.completed_section_ids.contains(section_id)
    }

    #[must_use]
    pub fn is_section_unlocked(&self, section_id: &str) -> bool {
        self.unlocked_section_ids.contains(section_id)
    }
}
