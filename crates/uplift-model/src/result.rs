use crate::completion::AnswerEntry;
use serde::Serialize;
use uplift_config::Category;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TallyEntry {
    pub category_id: String,
    pub title: String,
    pub votes: u32,
}

/// What the result screen of a finished section shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DisplayResult {
    #[serde(rename_all = "camelCase")]
    Category {
        category_id: String,
        title: String,
        affirmation: String,
        strengths: Vec<String>,
        tally: Vec<TallyEntry>,
    },
    #[serde(rename_all = "camelCase")]
    Answers {
        section_title: String,
        answers: Vec<AnswerEntry>,
    },
}

impl DisplayResult {
    #[must_use]
    pub fn from_category(category: &Category, tally: Vec<TallyEntry>) -> Self {
        Self::Category {
            category_id: category.id.clone(),
            title: category.title.clone(),
            affirmation: category.affirmation.clone(),
            strengths: category.strengths.clone(),
            tally,
        }
    }

    #[must_use]
    pub fn category_id(&self) -> Option<&str> {
        match self {
            Self::Category { category_id, .. } => Some(category_id),
            Self::Answers { .. } => None,
        }
    }
}
