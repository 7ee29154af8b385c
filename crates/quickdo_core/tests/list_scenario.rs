use quickdo_core::{CommitOutcome, EmptyStateReason, TaskListController};

// Full add -> edit -> delete round trip the list screen performs.
#[test]
fn add_edit_delete_round_trip() {
    let mut controller = TaskListController::new();
    assert_eq!(
        controller.empty_state_reason(),
        Some(EmptyStateReason::NoTasksAtAll)
    );

    controller.open_composer_for_new();
    controller.update_draft("Groceries");
    let created = controller.commit_draft().unwrap();
    let key = match created {
        CommitOutcome::Created(key) => key,
        CommitOutcome::Updated(_) => panic!("first commit must create"),
    };
    assert_eq!(controller.task_count(), 1);
    assert_eq!(controller.get_task(key).unwrap().text, "Groceries");

    assert!(controller.open_composer_for_edit(key));
    controller.update_draft("Groceries v2");
    assert_eq!(controller.commit_draft().unwrap(), CommitOutcome::Updated(key));
    assert_eq!(controller.task_count(), 1);
    assert_eq!(controller.get_task(key).unwrap().text, "Groceries v2");

    let request = controller.request_delete(key);
    assert_eq!(request.text.as_deref(), Some("Groceries v2"));
    assert!(controller.confirm_delete(request.key));

    assert_eq!(controller.task_count(), 0);
    assert_eq!(
        controller.empty_state_reason(),
        Some(EmptyStateReason::NoTasksAtAll)
    );
}
