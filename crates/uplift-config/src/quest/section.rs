use crate::quest::category::Category;
use crate::quest::error::CatalogError;
use crate::quest::question::Question;
use crate::quest::v01::section::SectionV01;
use indexmap::IndexMap;
use serde::Serialize;

/// How a completed section is turned into a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoringMode {
    /// Answers vote for one of the section's categories.
    CategoryVote,
    /// No categories; answers are carried forward as they were given.
    Verbatim,
}

/// Unit of single-sitting completion. Questions are non-empty and indexed `0..n` without gaps.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    id: String,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    questions: Vec<Question>,
    #[serde(serialize_with = "serialize_categories")]
    categories: IndexMap<String, Category>,
}

fn serialize_categories<S: serde::Serializer>(
    categories: &IndexMap<String, Category>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(categories.values())
}

impl Section {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: Option<String>,
        questions: Vec<Question>,
        categories: Vec<Category>,
    ) -> Result<Self, CatalogError> {
        let id = id.into();
        let mut by_id = IndexMap::with_capacity(categories.len());
        for category in categories {
            if by_id.contains_key(&category.id) {
                return Err(CatalogError::DuplicateCategory {
                    section: id,
                    category: category.id,
                });
            }
            by_id.insert(category.id.clone(), category);
        }
        let section = Self {
            id,
            title: title.into(),
            description,
            questions,
            categories: by_id,
        };
        section.validate()?;
        Ok(section)
    }

    pub(crate) fn from_v01(section: SectionV01) -> Result<Self, CatalogError> {
        let questions = section
            .questions
            .into_iter()
            .enumerate()
            .map(|(position, question)| Question::from_v01(position, question))
            .collect::<Result<Vec<_>, _>>()?;
        let section = Self {
            id: section.id,
            title: section.title,
            description: section.description,
            questions,
            categories: section
                .categories
                .into_iter()
                .map(|(id, category)| (id, category.into()))
                .collect(),
        };
        section.validate()?;
        Ok(section)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.questions.is_empty() {
            return Err(CatalogError::EmptySection {
                section: self.id.clone(),
            });
        }
        for (expected, question) in self.questions.iter().enumerate() {
            if question.index != expected {
                return Err(CatalogError::NonContiguousQuestions {
                    section: self.id.clone(),
                    expected,
                    found: question.index,
                });
            }
            question.validate_definition(&self.id, &self.categories)?;
        }
        if self.scoring_mode() == ScoringMode::CategoryVote && !self.questions.iter().any(Question::always_votes) {
            return Err(CatalogError::NoVotingQuestion {
                section: self.id.clone(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Categories in declaration order.
    #[must_use]
    pub fn categories(&self) -> &IndexMap<String, Category> {
        &self.categories
    }

    #[must_use]
    pub fn scoring_mode(&self) -> ScoringMode {
        if self.categories.is_empty() {
            ScoringMode::Verbatim
        } else {
            ScoringMode::CategoryVote
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quest::question::{ChoiceOption, QuestionKind};

    fn category(id: &str) -> Category {
        Category {
            id: id.to_owned(),
            title: id.to_uppercase(),
            strengths: vec![],
            affirmation: format!("You are {id}."),
        }
    }

    fn choice(index: usize, tags: &[(&str, &str)]) -> Question {
        Question::new(
            index,
            format!("Question {index}"),
            QuestionKind::SingleChoiceCategory {
                options: tags.iter().map(|(v, c)| ChoiceOption::new(*v, Some(*c))).collect(),
            },
        )
    }

    #[test]
    fn test_rejects_empty_section() {
        let err = Section::new("s", "S", None, vec![], vec![]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptySection { section } if section == "s"));
    }

    #[test]
    fn test_rejects_gaps() {
        let err = Section::new(
            "s",
            "S",
            None,
            vec![Question::ternary(0, "a"), Question::ternary(2, "b")],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::NonContiguousQuestions {
                expected: 1,
                found: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_unknown_category() {
        let err = Section::new("s", "S", None, vec![choice(0, &[("a", "ghost")])], vec![category("a")]).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory { category, .. } if category == "ghost"));
    }

    #[test]
    fn test_categorized_section_needs_a_voting_question() {
        let err = Section::new("s", "S", None, vec![Question::ternary(0, "a")], vec![category("a")]).unwrap_err();
        assert!(matches!(err, CatalogError::NoVotingQuestion { .. }));
    }

    #[test]
    fn test_scoring_mode() {
        let scored = Section::new(
            "s",
            "S",
            None,
            vec![choice(0, &[("x", "a"), ("y", "b")])],
            vec![category("a"), category("b")],
        )
        .unwrap();
        assert_eq!(scored.scoring_mode(), ScoringMode::CategoryVote);
        assert_eq!(scored.categories().keys().collect::<Vec<_>>(), ["a", "b"]);

        let verbatim = Section::new("v", "V", None, vec![Question::ternary(0, "a")], vec![]).unwrap();
        assert_eq!(verbatim.scoring_mode(), ScoringMode::Verbatim);
        assert_eq!(verbatim.question_count(), 1);
    }
}
