use std::fmt::Write;
use uplift_config::{Question, QuestionKind, Quest};
use uplift_core::FlowView;
use uplift_model::result::DisplayResult;

pub(crate) fn intro(quest: &Quest, section_id: &str) -> String {
    let mut out = quest.title.clone();
    if let Some(section) = quest.section(section_id) {
        let _ = write!(out, " / {}", section.title());
        if let Some(description) = section.description() {
            let _ = write!(out, "\n{description}");
        }
    }
    out.push_str("\nType /back to return to the previous question, /exit to leave.");
    out
}

pub(crate) fn question(view: &FlowView, question: &Question) -> String {
    let mut out = format!("\n({}/{}) {}", view.cursor + 1, view.question_count, question.text);
    match &question.kind {
        QuestionKind::Likert {
            points,
            hint_min,
            hint_max,
        } => {
            let _ = write!(
                out,
                "\n  1 = {}  ..  {points} = {}",
                hint_min.as_deref().unwrap_or("not at all"),
                hint_max.as_deref().unwrap_or("completely")
            );
        }
        QuestionKind::FreeText { placeholder } => {
            if let Some(placeholder) = placeholder {
                let _ = write!(out, "\n  e.g. {placeholder}");
            }
        }
        QuestionKind::SingleChoiceCategory { options }
        | QuestionKind::SingleChoiceWeighted { options }
        | QuestionKind::TernaryChoice { options } => {
            for (n, option) in options.iter().enumerate() {
                let _ = write!(out, "\n  {}) {}", n + 1, option.label);
            }
        }
    }
    if let Some(prefill) = &view.prefill {
        let _ = write!(out, "\n  [enter keeps: {prefill}]");
    }
    out
}

pub(crate) fn result(display: &DisplayResult) -> String {
    match display {
        DisplayResult::Category {
            title,
            affirmation,
            strengths,
            tally,
            ..
        } => {
            let mut out = format!("\n✨ {title}\n{affirmation}");
            for strength in strengths {
                let _ = write!(out, "\n  • {strength}");
            }
            let votes: Vec<_> = tally.iter().map(|t| format!("{} {}", t.title, t.votes)).collect();
            let _ = write!(out, "\n({})", votes.join(", "));
            out
        }
        DisplayResult::Answers { section_title, answers } => {
            let mut out = format!("\n✨ {section_title}, your answers:");
            for entry in answers {
                let _ = write!(out, "\n  {}\n    {}", entry.question_text, entry.answer);
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uplift_core::Phase;
    use uplift_model::completion::AnswerEntry;
    use uplift_model::result::TallyEntry;

    fn view(prefill: Option<&str>) -> FlowView {
        FlowView {
            quest_id: "q".to_owned(),
            section_id: "s".to_owned(),
            phase: Phase::InProgress,
            cursor: 1,
            question_count: 3,
            question: None,
            prefill: prefill.map(str::to_owned),
        }
    }

    #[test]
    fn test_render_question() {
        let text = question(&view(Some("no")), &Question::ternary(1, "Do you journal?"));
        assert!(text.contains("(2/3) Do you journal?"));
        assert!(text.contains("2) no"));
        assert!(text.contains("[enter keeps: no]"));
    }

    #[test]
    fn test_render_results() {
        let category = result(&DisplayResult::Category {
            category_id: "observer".to_owned(),
            title: "The Observer".to_owned(),
            affirmation: "Calm attention.".to_owned(),
            strengths: vec!["Noticing".to_owned()],
            tally: vec![TallyEntry {
                category_id: "observer".to_owned(),
                title: "The Observer".to_owned(),
                votes: 2,
            }],
        });
        assert!(category.contains("The Observer"));
        assert!(category.contains("(The Observer 2)"));

        let answers = result(&DisplayResult::Answers {
            section_title: "Reflection".to_owned(),
            answers: vec![AnswerEntry {
                question_index: 0,
                question_text: "What helped?".to_owned(),
                answer: "A walk".to_owned(),
            }],
        });
        assert!(answers.contains("What helped?\n    A walk"));
    }
}
