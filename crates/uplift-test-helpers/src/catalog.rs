use std::sync::Arc;
use uplift_config::{Category, ChoiceOption, ContentCatalog, Question, QuestionKind, Quest, Section};

#[must_use]
pub fn category(id: &str) -> Category {
    Category {
        id: id.to_owned(),
        title: id.to_uppercase(),
        strengths: vec![format!("{id} strength")],
        affirmation: format!("You are a {id}."),
    }
}

/// Category question whose options are named after the category they vote for.
#[must_use]
pub fn category_question(index: usize, categories: &[&str]) -> Question {
    Question::new(
        index,
        format!("Question {index}"),
        QuestionKind::SingleChoiceCategory {
            options: categories.iter().map(|c| ChoiceOption::new(*c, Some(*c))).collect(),
        },
    )
}

/// Section of `questions` category questions, each answerable with any of `categories`.
#[must_use]
pub fn category_section(id: &str, categories: &[&str], questions: usize) -> Section {
    let questions = (0..questions).map(|i| category_question(i, categories)).collect();
    let categories = categories.iter().map(|c| category(c)).collect();
    Section::new(id, id.to_uppercase(), None, questions, categories).expect("valid category section")
}

/// Uncategorized section of free text questions.
#[must_use]
pub fn free_text_section(id: &str, questions: usize) -> Section {
    let questions = (0..questions)
        .map(|i| Question::new(i, format!("Thought {i}"), QuestionKind::FreeText { placeholder: None }))
        .collect();
    Section::new(id, id.to_uppercase(), None, questions, vec![]).expect("valid free text section")
}

/// Uncategorized section with a single ternary question.
#[must_use]
pub fn ternary_section(id: &str) -> Section {
    Section::new(id, id.to_uppercase(), None, vec![Question::ternary(0, "Did it help?")], vec![])
        .expect("valid ternary section")
}

/// Catalog of quests in the given order, each with one-question ternary sections.
#[must_use]
pub fn linear_catalog(quests: &[(&str, &[&str])]) -> Arc<ContentCatalog> {
    let count = quests.len();
    let quests = quests
        .iter()
        .enumerate()
        .map(|(position, (id, sections))| {
            let sections = sections.iter().map(|s| ternary_section(s)).collect();
            Quest::new(*id, id.to_uppercase(), sections)
                .expect("valid quest")
                .with_weight(count - position)
        })
        .collect();
    Arc::new(ContentCatalog::new(quests).expect("valid catalog"))
}

#[must_use]
pub fn single_section_catalog(quest_id: &str, section: Section) -> Arc<ContentCatalog> {
    let quest = Quest::new(quest_id, quest_id.to_uppercase(), vec![section]).expect("valid quest");
    Arc::new(ContentCatalog::new(vec![quest]).expect("valid catalog"))
}
