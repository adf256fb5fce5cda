use crate::quest::category::Category;
use crate::quest::error::{AnswerError, CatalogError};
use crate::quest::v01::question::{OptionV01, QuestionBodyV01, QuestionV01};
use indexmap::IndexMap;
use serde::Serialize;
use uplift_utils::id_map::first_duplicate;

const TERNARY_DEFAULTS: [&str; 3] = ["yes", "no", "sometimes"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub weight: u32,
}

impl ChoiceOption {
    #[must_use]
    pub fn new(value: impl Into<String>, category: Option<&str>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
            category: category.map(str::to_owned),
            weight: 1,
        }
    }

    #[must_use]
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    fn from_v01(option: OptionV01) -> Self {
        Self {
            label: option.label.unwrap_or_else(|| option.value.clone()),
            value: option.value,
            category: option.category,
            weight: option.weight.unwrap_or(1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum QuestionKind {
    SingleChoiceCategory {
        options: Vec<ChoiceOption>,
    },
    SingleChoiceWeighted {
        options: Vec<ChoiceOption>,
    },
    Likert {
        points: u8,
        #[serde(skip_serializing_if = "Option::is_none")]
        hint_min: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        hint_max: Option<String>,
    },
    TernaryChoice {
        options: Vec<ChoiceOption>,
    },
    FreeText {
        #[serde(skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },
}

/// Shape of a question without its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    SingleChoiceCategory,
    SingleChoiceWeighted,
    Likert(u8),
    TernaryChoice,
    FreeText,
}

/// A single answer's contribution to a category tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vote<'a> {
    pub category_id: &'a str,
    pub weight: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub index: usize,
    pub text: String,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

impl Question {
    #[must_use]
    pub fn new(index: usize, text: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            index,
            text: text.into(),
            kind,
        }
    }

    /// Ternary question with the default yes / no / sometimes domain.
    #[must_use]
    pub fn ternary(index: usize, text: impl Into<String>) -> Self {
        let options = TERNARY_DEFAULTS.iter().map(|v| ChoiceOption::new(*v, None)).collect();
        Self::new(index, text, QuestionKind::TernaryChoice { options })
    }

    pub(crate) fn from_v01(position: usize, question: QuestionV01) -> Result<Self, CatalogError> {
        let kind = match question.body {
            QuestionBodyV01::SingleChoiceCategory(body) => QuestionKind::SingleChoiceCategory {
                options: body.options.into_values().map(ChoiceOption::from_v01).collect(),
            },
            QuestionBodyV01::SingleChoiceWeighted(body) => QuestionKind::SingleChoiceWeighted {
                options: body.options.into_values().map(ChoiceOption::from_v01).collect(),
            },
            QuestionBodyV01::Likert(body) => QuestionKind::Likert {
                points: body.points,
                hint_min: body.hint_min,
                hint_max: body.hint_max,
            },
            QuestionBodyV01::TernaryChoice(body) if body.options.is_empty() => {
                return Ok(Self::ternary(question.index.unwrap_or(position), question.text));
            }
            QuestionBodyV01::TernaryChoice(body) => QuestionKind::TernaryChoice {
                options: body.options.into_values().map(ChoiceOption::from_v01).collect(),
            },
            QuestionBodyV01::FreeText(body) => QuestionKind::FreeText {
                placeholder: body.placeholder,
            },
        };
        Ok(Self::new(question.index.unwrap_or(position), question.text, kind))
    }

    #[must_use]
    pub fn question_type(&self) -> QuestionType {
        match &self.kind {
            QuestionKind::SingleChoiceCategory { .. } => QuestionType::SingleChoiceCategory,
            QuestionKind::SingleChoiceWeighted { .. } => QuestionType::SingleChoiceWeighted,
            QuestionKind::Likert { points, .. } => QuestionType::Likert(*points),
            QuestionKind::TernaryChoice { .. } => QuestionType::TernaryChoice,
            QuestionKind::FreeText { .. } => QuestionType::FreeText,
        }
    }

    #[must_use]
    pub fn options(&self) -> &[ChoiceOption] {
        match &self.kind {
            QuestionKind::SingleChoiceCategory { options }
            | QuestionKind::SingleChoiceWeighted { options }
            | QuestionKind::TernaryChoice { options } => options,
            QuestionKind::Likert { .. } | QuestionKind::FreeText { .. } => &[],
        }
    }

    /// Explicit answer tokens. Empty for likert (implicitly `1..=points`) and free text.
    #[must_use]
    pub fn domain(&self) -> Vec<&str> {
        self.options().iter().map(|o| o.value.as_str()).collect()
    }

    /// Checks `token` against the question and returns the form it is recorded in.
    ///
    /// Likert answers are recorded as the plain decimal value, so `" 05 "` becomes `"5"`.
    pub fn accept(&self, token: &str) -> Result<String, AnswerError> {
        match &self.kind {
            QuestionKind::FreeText { .. } => Ok(token.to_owned()),
            _ if token.trim().is_empty() => Err(AnswerError::Blank),
            QuestionKind::Likert { points, .. } => {
                let value: i64 = token.trim().parse().map_err(|_| AnswerError::NotANumber {
                    value: token.to_owned(),
                })?;
                if value < 1 || value > i64::from(*points) {
                    return Err(AnswerError::AnswerOutOfRange {
                        min: 1,
                        max: *points,
                        value,
                    });
                }
                Ok(value.to_string())
            }
            _ => {
                if self.options().iter().any(|o| o.value == token) {
                    Ok(token.to_owned())
                } else {
                    Err(AnswerError::InvalidOption {
                        value: token.to_owned(),
                    })
                }
            }
        }
    }

    /// Category vote of an accepted token, if the picked option carries one.
    #[must_use]
    pub fn vote(&self, token: &str) -> Option<Vote<'_>> {
        let weighted = match &self.kind {
            QuestionKind::SingleChoiceCategory { .. } => false,
            QuestionKind::SingleChoiceWeighted { .. } => true,
            _ => return None,
        };
        let option = self.options().iter().find(|o| o.value == token)?;
        option.category.as_deref().map(|category_id| Vote {
            category_id,
            weight: if weighted { option.weight } else { 1 },
        })
    }

    /// Whether every possible answer to this question votes for a category.
    #[must_use]
    pub fn always_votes(&self) -> bool {
        matches!(
            self.kind,
            QuestionKind::SingleChoiceCategory { .. } | QuestionKind::SingleChoiceWeighted { .. }
        ) && self.options().iter().all(|o| o.category.is_some())
    }

    pub(crate) fn validate_definition(
        &self,
        section: &str,
        categories: &IndexMap<String, Category>,
    ) -> Result<(), CatalogError> {
        if let QuestionKind::Likert { points, .. } = self.kind {
            if points < 2 {
                return Err(CatalogError::InvalidLikert {
                    section: section.to_owned(),
                    question: self.index,
                    points,
                });
            }
            return Ok(());
        }
        if matches!(self.kind, QuestionKind::FreeText { .. }) {
            return Ok(());
        }
        if self.options().is_empty() {
            return Err(CatalogError::EmptyDomain {
                section: section.to_owned(),
                question: self.index,
            });
        }
        if let Some(value) = first_duplicate(self.options().iter().map(|o| o.value.as_str())) {
            return Err(CatalogError::DuplicateOption {
                section: section.to_owned(),
                question: self.index,
                option: value.to_owned(),
            });
        }
        for option in self.options() {
            match (&self.kind, &option.category) {
                (QuestionKind::SingleChoiceCategory { .. }, None) if !categories.is_empty() => {
                    return Err(CatalogError::MissingCategory {
                        section: section.to_owned(),
                        question: self.index,
                        option: option.value.clone(),
                    });
                }
                (QuestionKind::TernaryChoice { .. }, Some(category)) => {
                    return Err(CatalogError::UntalliedCategory {
                        section: section.to_owned(),
                        question: self.index,
                        category: category.clone(),
                    });
                }
                (_, Some(category)) if !categories.contains_key(category) => {
                    return Err(CatalogError::UnknownCategory {
                        section: section.to_owned(),
                        question: self.index,
                        category: category.clone(),
                    });
                }
                _ => {}
            }
            if option.weight == 0 {
                return Err(CatalogError::ZeroWeight {
                    section: section.to_owned(),
                    question: self.index,
                    option: option.value.clone(),
                });
            }
        }
        Ok(())
    }
}
