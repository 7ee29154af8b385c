use chrono::{TimeZone, Utc};
use quickdo_core::{Task, TaskValidationError};
use uuid::Uuid;

#[test]
fn task_new_sets_defaults() {
    let task = Task::new("Buy milk").unwrap();

    assert!(!task.key.is_nil());
    assert_eq!(task.text, "Buy milk");
    assert!(task.created_at <= Utc::now());
}

#[test]
fn task_new_trims_surrounding_whitespace() {
    let task = Task::new("  Call mom  ").unwrap();
    assert_eq!(task.text, "Call mom");
}

#[test]
fn task_new_rejects_whitespace_only_text() {
    let error = Task::new("   ").expect_err("whitespace-only text must be rejected");
    assert_eq!(error, TaskValidationError::EmptyText);
    assert_eq!(error.to_string(), "empty task");
}

#[test]
fn with_key_preserves_caller_identity() {
    let key = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let task = Task::with_key(key, "Groceries").unwrap();
    assert_eq!(task.key, key);
}

#[test]
fn rename_keeps_key_and_created_at() {
    let mut task = Task::new("draft").unwrap();
    let key = task.key;
    let created_at = task.created_at;

    task.rename("  final text ").unwrap();

    assert_eq!(task.key, key);
    assert_eq!(task.created_at, created_at);
    assert_eq!(task.text, "final text");

    let error = task.rename(" \t").expect_err("rename must validate like new");
    assert_eq!(error, TaskValidationError::EmptyText);
}

#[test]
fn created_label_matches_list_card_format() {
    let mut task = Task::new("anything").unwrap();
    task.created_at = Utc.with_ymd_and_hms(2026, 8, 5, 9, 30, 0).unwrap();
    assert_eq!(task.created_label(), "Wed Aug 05 2026");
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let key = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut task = Task::with_key(key, "ship the list screen").unwrap();
    task.created_at = Utc.with_ymd_and_hms(2026, 8, 27, 12, 0, 0).unwrap();

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["key"], key.to_string());
    assert_eq!(json["text"], "ship the list screen");
    assert!(json["created_at"].is_string());

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}
