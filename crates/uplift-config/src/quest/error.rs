use thiserror::Error;
use uplift_utils::loader::error::LoadingError;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    ParseError(#[from] serde_yml::Error),

    #[error(transparent)]
    Loading(#[from] LoadingError),

    #[error("Quest `{0}` is defined more than once.")]
    DuplicateQuest(String),

    #[error("Quest `{quest}` is invalid: {source}")]
    InvalidQuest {
        quest: String,
        #[source]
        source: Box<CatalogError>,
    },

    #[error("Quest `{quest}` has no sections.")]
    EmptyQuest { quest: String },

    #[error("Section `{section}` is declared more than once.")]
    DuplicateSection { section: String },

    #[error("Section `{section}` has no questions.")]
    EmptySection { section: String },

    #[error("Category `{category}` is declared more than once in section `{section}`.")]
    DuplicateCategory { section: String, category: String },

    #[error("Question {found} of section `{section}` is declared at position {expected}.")]
    NonContiguousQuestions {
        section: String,
        expected: usize,
        found: usize,
    },

    #[error("Question {question} of section `{section}` has no options.")]
    EmptyDomain { section: String, question: usize },

    #[error("Likert question {question} of section `{section}` needs at least 2 points, got {points}.")]
    InvalidLikert {
        section: String,
        question: usize,
        points: u8,
    },

    #[error("Question {question} of section `{section}` refers to unknown category `{category}`.")]
    UnknownCategory {
        section: String,
        question: usize,
        category: String,
    },

    #[error("Option `{option}` of question {question} in section `{section}` is declared more than once.")]
    DuplicateOption {
        section: String,
        question: usize,
        option: String,
    },

    #[error("Ternary question {question} of section `{section}` cannot vote for category `{category}`.")]
    UntalliedCategory {
        section: String,
        question: usize,
        category: String,
    },

    #[error("Option `{option}` of question {question} in section `{section}` has no category.")]
    MissingCategory {
        section: String,
        question: usize,
        option: String,
    },

    #[error("Option `{option}` of question {question} in section `{section}` has a weight of zero.")]
    ZeroWeight {
        section: String,
        question: usize,
        option: String,
    },

    #[error("Section `{section}` declares categories but none of its questions can vote for one.")]
    NoVotingQuestion { section: String },
}

/// Reasons a submitted answer token is not accepted for a question.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnswerError {
    #[error("answer must not be blank")]
    Blank,
    #[error("invalid option: {value}")]
    InvalidOption { value: String },
    #[error("not a number: {value}")]
    NotANumber { value: String },
    #[error("invalid answer value: {value}. min: {min}, max: {max}")]
    AnswerOutOfRange { min: u8, max: u8, value: i64 },
}
