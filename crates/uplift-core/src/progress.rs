//! Unlock and completion state, derived from completion records on every call.
//!
//! Unlocking is linear: the first section of the first quest is always open, a section opens
//! once the section before it is completed, and a quest opens once every section of the quest
//! before it is completed. Sections of a locked quest stay locked.

use chrono::{DateTime, Utc};
use indexmap::{IndexMap, IndexSet};
use std::collections::HashMap;
use uplift_config::ContentCatalog;
use uplift_model::completion::CompletionRecord;
use uplift_model::progress::QuestProgress;

/// Most recent completion per `(quest, section)`, restricted to sections still in the catalog.
fn latest_completions<'r>(
    catalog: &ContentCatalog,
    completions: &'r [CompletionRecord],
) -> HashMap<(&'r str, &'r str), DateTime<Utc>> {
    let mut latest: HashMap<(&str, &str), DateTime<Utc>> = HashMap::new();
    for record in completions {
        if catalog.get_section(&record.quest_id, &record.section_id).is_none() {
            tracing::debug!(
                quest_id = record.quest_id,
                section_id = record.section_id,
                "ignoring completion of unknown section"
            );
            continue;
        }
        latest
            .entry((record.quest_id.as_str(), record.section_id.as_str()))
            .and_modify(|at| *at = (*at).max(record.completed_at_utc))
            .or_insert(record.completed_at_utc);
    }
    latest
}

#[must_use]
pub fn compute(catalog: &ContentCatalog, quest_id: &str, completions: &[CompletionRecord]) -> QuestProgress {
    let latest = latest_completions(catalog, completions);
    let mut progress = QuestProgress {
        quest_id: quest_id.to_owned(),
        ..QuestProgress::default()
    };

    let mut previous_completed = true;
    for quest in catalog.quests() {
        let quest_unlocked = previous_completed;
        let mut completed_sections = IndexSet::new();
        let mut unlocked_sections = IndexSet::new();
        let mut last_completed = IndexMap::new();
        let mut previous_section_completed = quest_unlocked;

        for section in quest.sections() {
            if previous_section_completed {
                unlocked_sections.insert(section.id().to_owned());
            }
            let completed_at = latest.get(&(quest.id.as_str(), section.id())).copied();
            if let Some(at) = completed_at {
                completed_sections.insert(section.id().to_owned());
                last_completed.insert(section.id().to_owned(), at);
            }
            previous_section_completed = quest_unlocked && completed_at.is_some();
        }

        let quest_completed = completed_sections.len() == quest.sections().len();
        if quest_completed {
            progress.completed_quest_ids.insert(quest.id.clone());
        }
        if quest.id == quest_id {
            progress.quest_unlocked = quest_unlocked;
            progress.quest_completed = quest_completed;
            progress.completed_section_ids = completed_sections;
            progress.unlocked_section_ids = unlocked_sections;
            progress.last_completed = last_completed;
        }
        previous_completed = quest_completed;
    }

    progress.badge_earned = !catalog.is_empty() && progress.completed_quest_ids.len() == catalog.quests().len();
    progress
}

/// Fallback when completions could not be fetched: nothing completed, only the entry point open.
#[must_use]
pub fn degraded(catalog: &ContentCatalog, quest_id: &str) -> QuestProgress {
    QuestProgress {
        degraded: true,
        ..compute(catalog, quest_id, &[])
    }
}
