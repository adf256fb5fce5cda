use std::sync::Arc;
use test_log::test;
use uplift_config::AnswerError;
use uplift_core::store::MemoryCompletionStore;
use uplift_core::{BackOutcome, FlowError, Outcome, Phase, QuestService, ServiceError};
use uplift_model::result::DisplayResult;
use uplift_test_helpers::{category_section, free_text_section, single_section_catalog};

fn service_for(section: uplift_config::Section) -> (QuestService, MemoryCompletionStore) {
    let store = MemoryCompletionStore::new();
    let service = QuestService::new(
        Arc::new(single_section_catalog("quest", section)),
        Arc::new(store.clone()),
    );
    (service, store)
}

#[test(tokio::test)]
async fn test_majority_category_wins() {
    let (service, store) = service_for(category_section("s", &["a", "b"], 10));
    let handle = service.start_section("quest", "s").await.unwrap();
    for token in ["a"; 6].into_iter().chain(["b"; 4]) {
        handle.submit_answer(token).unwrap();
    }
    assert_eq!(handle.view().unwrap().phase, Phase::Scoring);

    let finished = service.finish(&handle).unwrap();
    assert_eq!(finished.display.category_id(), Some("a"));
    let DisplayResult::Category { tally, strengths, .. } = &finished.display else {
        panic!("expected a category result");
    };
    assert_eq!(tally.iter().map(|t| t.votes).collect::<Vec<_>>(), [6, 4]);
    assert_eq!(strengths, &["a strength"]);

    finished.receipt.wait().await.unwrap();
    assert_eq!(store.len().await, 1);
}

#[test(tokio::test)]
async fn test_tie_is_deterministic() {
    let (service, _) = service_for(category_section("s", &["a", "b"], 10));
    for _ in 0..100 {
        let handle = service.start_section("quest", "s").await.unwrap();
        for token in ["b", "a"].into_iter().cycle().take(10) {
            handle.submit_answer(token).unwrap();
        }
        let finished = service.finish(&handle).unwrap();
        let Outcome::Category { category, .. } = finished.outcome else {
            panic!("expected a category outcome");
        };
        assert_eq!(category.id, "a");
    }
}

#[test(tokio::test)]
async fn test_unknown_section() {
    let (service, _) = service_for(category_section("s", &["a"], 1));
    let err = service.start_section("quest", "missing").await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { section_id, .. } if section_id == "missing"));
    let err = service.start_section("missing", "s").await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { .. }));
}

#[test(tokio::test)]
async fn test_invalid_option_keeps_cursor() {
    let (service, _) = service_for(category_section("s", &["a", "b"], 3));
    let handle = service.start_section("quest", "s").await.unwrap();
    handle.submit_answer("a").unwrap();

    let err = handle.submit_answer("invalid_option").unwrap_err();
    assert!(matches!(
        err,
        FlowError::InvalidAnswer {
            question_index: 1,
            reason: AnswerError::InvalidOption { .. }
        }
    ));
    let view = handle.view().unwrap();
    assert_eq!(view.cursor, 1);
    assert_eq!(view.question.unwrap().index, 1);
}

#[test(tokio::test)]
async fn test_back_and_revise() {
    let (service, _) = service_for(category_section("s", &["a", "b"], 3));
    let handle = service.start_section("quest", "s").await.unwrap();
    assert_eq!(handle.go_back().unwrap(), BackOutcome::ExitedFlow);

    handle.submit_answer("a").unwrap();
    handle.submit_answer("a").unwrap();
    let BackOutcome::Moved(view) = handle.go_back().unwrap() else {
        panic!("expected to move back");
    };
    assert_eq!(view.prefill.as_deref(), Some("a"));
    handle.submit_answer("b").unwrap();
    handle.submit_answer("b").unwrap();

    let finished = service.finish(&handle).unwrap();
    assert_eq!(finished.display.category_id(), Some("b"));
    let answers: Vec<_> = finished.record.answers.iter().map(|a| a.answer.as_str()).collect();
    assert_eq!(answers, ["a", "b", "b"]);
}

#[test(tokio::test)]
async fn test_free_text_section_has_no_category() {
    let (service, store) = service_for(free_text_section("journal", 2));
    let handle = service.start_section("quest", "journal").await.unwrap();
    handle.submit_answer("I slept well").unwrap();
    handle.submit_answer("").unwrap();

    let finished = service.finish(&handle).unwrap();
    assert!(matches!(finished.outcome, Outcome::Verbatim));
    let DisplayResult::Answers { section_title, answers } = &finished.display else {
        panic!("expected answers");
    };
    assert_eq!(section_title, "JOURNAL");
    assert_eq!(answers.len(), 2);
    assert_eq!(answers[0].question_text, "Thought 0");
    assert_eq!(answers, &finished.record.answers);

    finished.receipt.wait().await.unwrap();
    assert!(service.get_progress("quest").await.unwrap().quest_completed);
    assert_eq!(store.len().await, 1);
}

#[test(tokio::test)]
async fn test_closed_flow_saves_nothing() {
    let (service, store) = service_for(category_section("s", &["a"], 2));
    let handle = service.start_section("quest", "s").await.unwrap();
    handle.submit_answer("a").unwrap();
    handle.close();
    assert!(store.is_empty().await);
}
