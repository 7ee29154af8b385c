use quickdo_core::{ComposerMode, TaskListController};
use uuid::Uuid;

fn controller_with(texts: &[&str]) -> TaskListController {
    let mut controller = TaskListController::new();
    for text in texts {
        controller.open_composer_for_new();
        controller.update_draft(*text);
        controller.commit_draft().unwrap();
    }
    controller
}

#[test]
fn open_for_new_starts_a_blank_open_draft() {
    let mut controller = TaskListController::new();
    controller.update_draft("leftover");

    controller.open_composer_for_new();

    let composer = controller.composer();
    assert!(composer.is_open);
    assert!(composer.draft_text.is_empty());
    assert_eq!(composer.editing_key, None);
    assert_eq!(composer.mode(), ComposerMode::New);
    assert_eq!(composer.placeholder(), "Add your task");
}

#[test]
fn open_for_edit_seeds_draft_with_task_text() {
    let mut controller = controller_with(&["Buy milk"]);
    let key = controller.visible_tasks().next().unwrap().key;

    assert!(controller.open_composer_for_edit(key));

    let composer = controller.composer();
    assert!(composer.is_open);
    assert_eq!(composer.draft_text, "Buy milk");
    assert_eq!(composer.editing_key, Some(key));
    assert_eq!(composer.mode(), ComposerMode::Edit);
    assert_eq!(composer.placeholder(), "Edit your task");
}

#[test]
fn open_for_edit_with_stale_key_is_a_no_op() {
    let mut controller = controller_with(&["Buy milk"]);

    assert!(!controller.open_composer_for_edit(Uuid::new_v4()));

    let composer = controller.composer();
    assert!(!composer.is_open);
    assert_eq!(composer.editing_key, None);
}

#[test]
fn update_draft_stores_text_verbatim() {
    let mut controller = TaskListController::new();
    controller.open_composer_for_new();

    controller.update_draft("  buy  milk  ");

    // Live typing keeps interior and trailing spaces; trimming is a
    // commit-time concern only.
    assert_eq!(controller.composer().draft_text, "  buy  milk  ");
}

#[test]
fn cancel_discards_draft_without_touching_tasks() {
    let mut controller = controller_with(&["Buy milk"]);
    let key = controller.visible_tasks().next().unwrap().key;
    controller.open_composer_for_edit(key);
    controller.update_draft("half-finished edit");

    controller.cancel_composer();

    let composer = controller.composer();
    assert!(!composer.is_open);
    assert!(composer.draft_text.is_empty());
    assert_eq!(composer.editing_key, None);
    assert_eq!(controller.task_count(), 1);
    assert_eq!(controller.get_task(key).unwrap().text, "Buy milk");
}
