use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use std::sync::Arc;
use uplift_core::progress;
use uplift_core::{FlowController, FlowState};
use uplift_model::completion::CompletionRecord;
use uplift_test_helpers::{category_section, linear_catalog};

const CATEGORIES: [&str; 2] = ["a", "b"];

#[derive(Debug, Clone)]
enum Step {
    Answer(usize),
    Invalid(String),
    Back,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => (0..CATEGORIES.len()).prop_map(Step::Answer),
        1 => "[c-z ]{0,6}".prop_map(Step::Invalid),
        2 => Just(Step::Back),
    ]
}

fn started(questions: usize) -> FlowController {
    let mut flow = FlowController::new("quest", Arc::new(category_section("s", &CATEGORIES, questions)));
    flow.start().unwrap();
    flow
}

fn snapshot(flow: &FlowController) -> (usize, Vec<(usize, String)>) {
    let answers = flow.answers().iter().map(|(i, a)| (i, a.to_owned())).collect();
    (flow.cursor(), answers)
}

proptest! {
    #[test]
    fn answers_always_cover_questions_before_cursor(
        questions in 1usize..6,
        steps in prop::collection::vec(step(), 0..40),
    ) {
        let mut flow = started(questions);
        for step in steps {
            let _ = match step {
                Step::Answer(i) => flow.submit_answer(CATEGORIES[i]).map(|_| ()),
                Step::Invalid(token) => flow.submit_answer(&token).map(|_| ()),
                Step::Back => flow.go_back().map(|_| ()),
            };
            let cursor = flow.cursor();
            prop_assert!(cursor <= questions);
            let keys: Vec<usize> = flow.answers().iter().map(|(i, _)| i).collect();
            prop_assert_eq!(keys, (0..cursor).collect::<Vec<_>>());
            prop_assert_eq!(matches!(flow.state(), FlowState::Scoring), cursor == questions);
        }
    }

    #[test]
    fn rejected_answer_leaves_flow_unchanged(
        questions in 1usize..6,
        answered in 0usize..6,
        token in "[c-z ]{0,6}",
    ) {
        let mut flow = started(questions);
        for _ in 0..answered.min(questions - 1) {
            flow.submit_answer("a").unwrap();
        }
        let before = snapshot(&flow);
        prop_assert!(flow.submit_answer(&token).is_err());
        prop_assert_eq!(snapshot(&flow), before);
    }

    #[test]
    fn badge_and_unlocks_follow_completions(done in prop::collection::vec(any::<bool>(), 6)) {
        let quests: [(&str, &[&str]); 3] = [("q0", &["s0", "s1"]), ("q1", &["s0", "s1"]), ("q2", &["s0", "s1"])];
        let catalog = linear_catalog(&quests);
        let completions: Vec<CompletionRecord> = quests
            .iter()
            .flat_map(|(quest, sections)| sections.iter().map(move |section| (*quest, *section)))
            .zip(&done)
            .filter(|(_, done)| **done)
            .map(|((quest, section), _)| CompletionRecord {
                quest_id: quest.to_owned(),
                section_id: section.to_owned(),
                section_title: section.to_uppercase(),
                answers: vec![],
                completed_at_utc: Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(),
            })
            .collect();

        let progress: Vec<_> = quests
            .iter()
            .map(|(quest, _)| progress::compute(&catalog, quest, &completions))
            .collect();

        prop_assert_eq!(progress[0].badge_earned, done.iter().all(|d| *d));
        for (k, quest) in progress.iter().enumerate() {
            prop_assert_eq!(quest.quest_completed, done[2 * k] && done[2 * k + 1]);
            if k + 1 < progress.len() && !quest.quest_completed {
                let next = &progress[k + 1];
                prop_assert!(!next.quest_unlocked);
                prop_assert!(next.unlocked_section_ids.is_empty());
            }
        }
    }
}
