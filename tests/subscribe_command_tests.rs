use seat_alert_bot::bot::commands::subscribe::{subscribe_from_text, subscribe_reply, SubscribeError};
use seat_alert_bot::database::{models::SubscriptionRecord, store::SubscriptionStore};
use seat_alert_bot::error::ParseError;
use seat_alert_bot::utils::feedback::FeedbackType;
use tempfile::TempDir;

/// Helper function to create a test store
async fn create_test_store() -> (SubscriptionStore, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = SubscriptionStore::open(temp_dir.path().join("db.json"))
        .await
        .expect("Failed to open test store");
    (store, temp_dir)
}

#[tokio::test]
async fn test_subscribe_creates_matching_record() {
    let (store, _temp_dir) = create_test_store().await;

    let record = subscribe_from_text(&store, 555, "Moscow, Kazan, 2024-05-01, seat")
        .await
        .expect("subscription should be created");

    let expected = SubscriptionRecord::new(555, "Moscow", "Kazan", "2024-05-01", "seat");
    assert_eq!(record, expected);
    assert_eq!(store.list_all().await, vec![expected]);
}

#[tokio::test]
async fn test_subscribe_is_not_deduplicated() {
    let (store, _temp_dir) = create_test_store().await;

    for _ in 0..2 {
        subscribe_from_text(&store, 1, "Moscow, Kazan, 2024-05-01, seat")
            .await
            .expect("subscription should be created");
    }

    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn test_subscribe_with_too_few_fields_is_rejected() {
    let (store, _temp_dir) = create_test_store().await;

    for input in ["", "Moscow", "Moscow, Kazan", "Moscow, Kazan, 2024-05-01"] {
        let result = subscribe_from_text(&store, 1, input).await;
        assert!(
            matches!(result, Err(SubscribeError::Invalid(ParseError::FieldCount(_)))),
            "accepted '{input}'"
        );
    }

    assert!(store.is_empty().await);
    assert!(store.load().await.expect("store readable").is_empty());
}

#[tokio::test]
async fn test_subscribe_with_blank_field_is_rejected() {
    let (store, _temp_dir) = create_test_store().await;

    let result = subscribe_from_text(&store, 1, "Moscow, Kazan, , seat").await;

    assert!(matches!(
        result,
        Err(SubscribeError::Invalid(ParseError::EmptyField("date")))
    ));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_subscribe_surfaces_persistence_failure() {
    let (store, temp_dir) = create_test_store().await;
    std::fs::create_dir(temp_dir.path().join("db.json.tmp")).expect("block temp file");

    let result = subscribe_from_text(&store, 1, "Moscow, Kazan, 2024-05-01, seat").await;

    assert!(matches!(result, Err(SubscribeError::Store(_))));
}

#[tokio::test]
async fn test_subscriptions_are_kept_per_chat() {
    let (store, _temp_dir) = create_test_store().await;

    subscribe_from_text(&store, 1, "Moscow, Kazan, 2024-05-01, seat").await.expect("create");
    subscribe_from_text(&store, 2, "Omsk, Tomsk, 2024-06-01, berth").await.expect("create");

    let first = store.list_for_user(1).await;
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].origin, "Moscow");
}

#[tokio::test]
async fn test_malformed_subscribe_gets_rejection_reply() {
    let (store, _temp_dir) = create_test_store().await;

    let outcome = subscribe_from_text(&store, 1, "Moscow, Kazan").await;
    let (kind, text) = subscribe_reply(&outcome);

    assert_eq!(kind, FeedbackType::Error);
    assert!(text.contains("/subscribe origin, destination, date, place type"));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_backslash_in_subscription_survives_reply_escaping() {
    let (store, _temp_dir) = create_test_store().await;

    let outcome = subscribe_from_text(&store, 1, "Moscow, Kazan, 2024\\.05.01, seat").await;
    let (kind, text) = subscribe_reply(&outcome);

    assert_eq!(kind, FeedbackType::Success);
    assert!(kind.format(&text).contains("2024\\\\\\.05\\.01"));
}
