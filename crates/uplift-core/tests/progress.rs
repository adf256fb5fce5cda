use std::sync::Arc;
use test_log::test;
use uplift_core::QuestService;
use uplift_core::store::MemoryCompletionStore;
use uplift_test_helpers::{FailingStore, GatedStore, linear_catalog};

async fn complete(service: &QuestService, quest_id: &str, section_id: &str) {
    let handle = service.start_section(quest_id, section_id).await.unwrap();
    handle.submit_answer("yes").unwrap();
    service.finish(&handle).unwrap().receipt.wait().await.unwrap();
}

#[test(tokio::test)]
async fn test_sections_unlock_in_order() {
    let catalog = linear_catalog(&[("first", &["s1", "s2", "s3"]), ("second", &["t1"])]);
    let service = QuestService::new(Arc::new(catalog), Arc::new(MemoryCompletionStore::new()));

    let progress = service.get_progress("first").await.unwrap();
    assert!(progress.is_section_unlocked("s1"));
    assert!(!progress.is_section_unlocked("s2"));

    complete(&service, "first", "s1").await;
    complete(&service, "first", "s2").await;
    let progress = service.get_progress("first").await.unwrap();
    assert!(progress.is_section_unlocked("s3"));
    assert!(!progress.is_section_completed("s3"));
    assert!(!progress.quest_completed);
    assert!(!service.get_progress("second").await.unwrap().quest_unlocked);

    complete(&service, "first", "s3").await;
    let second = service.get_progress("second").await.unwrap();
    assert!(second.quest_unlocked);
    assert!(second.is_section_unlocked("t1"));
}

#[test(tokio::test)]
async fn test_badge_needs_every_quest() {
    let catalog = linear_catalog(&[("first", &["s1"]), ("second", &["t1", "t2"])]);
    let service = QuestService::new(Arc::new(catalog), Arc::new(MemoryCompletionStore::new()));

    complete(&service, "first", "s1").await;
    complete(&service, "second", "t1").await;
    let progress = service.get_progress("second").await.unwrap();
    assert!(!progress.badge_earned);
    assert_eq!(progress.completed_quest_ids.len(), 1);

    complete(&service, "second", "t2").await;
    let progress = service.get_progress("first").await.unwrap();
    assert!(progress.badge_earned);
    assert_eq!(progress.completed_quest_ids.len(), 2);
}

#[test(tokio::test)]
async fn test_finish_does_not_wait_for_save() {
    let store = GatedStore::new();
    let catalog = linear_catalog(&[("first", &["s1", "s2"])]);
    let service = QuestService::new(Arc::new(catalog), Arc::new(store.clone()));

    let handle = service.start_section("first", "s1").await.unwrap();
    handle.submit_answer("no").unwrap();
    let finished = service.finish(&handle).unwrap();
    assert_eq!(finished.record.section_id, "s1");
    assert!(!finished.receipt.is_finished());
    assert!(!service.get_progress("first").await.unwrap().is_section_completed("s1"));

    store.open(1);
    finished.receipt.wait().await.unwrap();
    assert!(service.get_progress("first").await.unwrap().is_section_unlocked("s2"));
    assert_eq!(store.records().len().await, 1);
}

#[test(tokio::test)]
async fn test_store_outage_degrades_progress() {
    let store = Arc::new(FailingStore::new());
    let catalog = linear_catalog(&[("first", &["s1", "s2"]), ("second", &["t1"])]);
    let service = QuestService::new(Arc::new(catalog), store.clone());

    let handle = service.start_section("first", "s1").await.unwrap();
    handle.submit_answer("yes").unwrap();
    let finished = service.finish(&handle).unwrap();
    assert_eq!(finished.record.answers[0].answer, "yes");
    assert!(finished.receipt.wait().await.is_err());
    assert_eq!(store.saves(), 1);

    let progress = service.get_progress("first").await.unwrap();
    assert!(progress.degraded);
    assert!(progress.is_section_unlocked("s1"));
    assert!(!progress.is_section_unlocked("s2"));
    assert!(!service.get_progress("second").await.unwrap().quest_unlocked);
}
