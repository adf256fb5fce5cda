use crate::quest::v01::section::CategoryV01;
use serde::Serialize;

/// Labeled outcome a categorized section's answers are tallied into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub strengths: Vec<String>,
    pub affirmation: String,
}

impl From<CategoryV01> for Category {
    fn from(v01: CategoryV01) -> Self {
        Self {
            id: v01.id,
            title: v01.title,
            strengths: v01.strengths,
            affirmation: v01.affirmation,
        }
    }
}
