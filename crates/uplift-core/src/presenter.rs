//! Turns a completed flow into what is persisted and what is shown.

use crate::answers::AnswerSet;
use crate::scoring::Outcome;
use chrono::{DateTime, Utc};
use uplift_config::Section;
use uplift_model::completion::{AnswerEntry, CompletionRecord};
use uplift_model::result::DisplayResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub record: CompletionRecord,
    pub display: DisplayResult,
}

#[must_use]
pub fn answer_entries(section: &Section, answers: &AnswerSet) -> Vec<AnswerEntry> {
    answers
        .iter()
        .map(|(question_index, answer)| AnswerEntry {
            question_index,
            question_text: section
                .question(question_index)
                .map(|q| q.text.clone())
                .unwrap_or_default(),
            answer: answer.to_owned(),
        })
        .collect()
}

#[must_use]
pub fn present(
    quest_id: &str,
    section: &Section,
    answers: &AnswerSet,
    outcome: &Outcome,
    completed_at_utc: DateTime<Utc>,
) -> Presentation {
    let entries = answer_entries(section, answers);
    let display = match outcome {
        Outcome::Category { category, tally } => DisplayResult::from_category(category, tally.clone()),
        Outcome::Verbatim => DisplayResult::Answers {
            section_title: section.title().to_owned(),
            answers: entries.clone(),
        },
    };
    Presentation {
        record: CompletionRecord {
            quest_id: quest_id.to_owned(),
            section_id: section.id().to_owned(),
            section_title: section.title().to_owned(),
            answers: entries,
            completed_at_utc,
        },
        display,
    }
}
