pub mod catalog;
pub mod quest;

pub use catalog::ContentCatalog;
pub use quest::category::Category;
pub use quest::error::{AnswerError, CatalogError};
pub use quest::question::{ChoiceOption, Question, QuestionKind, QuestionType, Vote};
pub use quest::section::{ScoringMode, Section};
pub use quest::Quest;
