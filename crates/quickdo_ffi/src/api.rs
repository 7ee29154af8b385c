//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the task list controller to Dart as stable sync functions.
//! - Keep error semantics simple for the single-screen UI.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Task keys cross the boundary as UUID strings; unparseable keys behave
//!   like stale keys (defined no-ops), never errors.
//! - One process-global controller serves all calls, serialized through a
//!   mutex because FRB calls can arrive from the platform thread.

use quickdo_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    ComposerMode, EmptyStateReason, TaskId, TaskListController,
};
use std::sync::{Mutex, OnceLock};
use uuid::Uuid;

const DELETE_PROMPT: &str = "Are you sure you want to delete this task?";
const EMPTY_TASK_MESSAGE: &str = "Task cannot be empty";

static CONTROLLER: OnceLock<Mutex<TaskListController>> = OnceLock::new();

fn with_controller<T>(f: impl FnOnce(&mut TaskListController) -> T) -> T {
    let lock = CONTROLLER.get_or_init(|| {
        log::info!("event=controller_init module=ffi status=ok");
        Mutex::new(TaskListController::new())
    });
    // A poisoned lock only means a previous caller panicked mid-operation;
    // the plain-data state inside is still usable.
    let mut guard = lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    f(&mut guard)
}

fn parse_key(key: &str) -> Option<TaskId> {
    Uuid::parse_str(key.trim()).ok()
}

/// One task row shaped for list rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    /// Stable task key in string form.
    pub key: String,
    /// Task text as stored (trimmed, non-empty).
    pub text: String,
    /// Creation date label, e.g. `Wed Aug 27 2026`.
    pub created_at: String,
}

/// Snapshot of the composer surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerView {
    /// Draft text exactly as typed so far.
    pub draft_text: String,
    /// Whether the composer modal is visible.
    pub is_open: bool,
    /// Whether the draft targets an existing task.
    pub is_editing: bool,
    /// Input placeholder for the current mode.
    pub placeholder: String,
}

/// Result envelope for `composer_commit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitResponse {
    /// Whether the draft was accepted.
    pub ok: bool,
    /// Key of the created/updated task on success.
    pub key: Option<String>,
    /// Human-readable message for the alert/snackbar on failure.
    pub message: String,
}

/// Confirmation request for the delete dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequestView {
    /// Key to pass back to `confirm_delete` on acceptance.
    pub key: String,
    /// Current text of the targeted task; `None` when already gone.
    pub text: Option<String>,
    /// Dialog message to display.
    pub prompt: String,
}

/// Why the visible list is empty, for placeholder messaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyStateView {
    /// At least one task is visible.
    Populated,
    /// No tasks exist at all.
    NoTasksAtAll,
    /// Tasks exist but the query matched none.
    NoSearchResults,
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Opens the composer with a blank draft for a new task.
///
/// # FFI contract
/// - Sync call, in-memory state only, never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn composer_open_new() {
    with_controller(|controller| controller.open_composer_for_new());
}

/// Opens the composer pre-filled with an existing task's text.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Returns `false` (and opens nothing) for stale or malformed keys.
#[flutter_rust_bridge::frb(sync)]
pub fn composer_open_edit(key: String) -> bool {
    match parse_key(&key) {
        Some(key) => with_controller(|controller| controller.open_composer_for_edit(key)),
        None => false,
    }
}

/// Mirrors one keystroke of composer input into core state.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Text is stored verbatim; no trimming until commit.
#[flutter_rust_bridge::frb(sync)]
pub fn composer_update_draft(text: String) {
    with_controller(|controller| controller.update_draft(text));
}

/// Commits the current draft as a create or in-place edit.
///
/// # FFI contract
/// - Sync call, never panics.
/// - On rejection the composer stays open and `message` carries the alert
///   text for the UI.
#[flutter_rust_bridge::frb(sync)]
pub fn composer_commit() -> CommitResponse {
    with_controller(|controller| match controller.commit_draft() {
        Ok(outcome) => CommitResponse {
            ok: true,
            key: Some(outcome.key().to_string()),
            message: String::new(),
        },
        Err(_) => CommitResponse {
            ok: false,
            key: None,
            message: EMPTY_TASK_MESSAGE.to_string(),
        },
    })
}

/// Discards the current draft and closes the composer.
///
/// # FFI contract
/// - Sync call, never panics, never mutates the task collection.
#[flutter_rust_bridge::frb(sync)]
pub fn composer_cancel() {
    with_controller(|controller| controller.cancel_composer());
}

/// Returns the composer snapshot that drives the add/edit modal.
///
/// # FFI contract
/// - Sync call, never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn composer_state() -> ComposerView {
    with_controller(|controller| {
        let composer = controller.composer();
        ComposerView {
            draft_text: composer.draft_text.clone(),
            is_open: composer.is_open,
            is_editing: composer.mode() == ComposerMode::Edit,
            placeholder: composer.placeholder().to_string(),
        }
    })
}

/// Replaces the live search query.
///
/// # FFI contract
/// - Sync call, never panics, never mutates the task collection.
#[flutter_rust_bridge::frb(sync)]
pub fn set_search_query(query: String) {
    with_controller(|controller| controller.set_search_query(query));
}

/// Returns the rows the list should render under the current query.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Insertion order is preserved; recomputed on every call.
#[flutter_rust_bridge::frb(sync)]
pub fn visible_tasks() -> Vec<TaskView> {
    with_controller(|controller| {
        controller
            .visible_tasks()
            .map(|task| TaskView {
                key: task.key.to_string(),
                text: task.text.clone(),
                created_at: task.created_label(),
            })
            .collect()
    })
}

/// Explains an empty list so the UI can pick its placeholder message.
///
/// # FFI contract
/// - Sync call, never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn empty_state() -> EmptyStateView {
    with_controller(|controller| match controller.empty_state_reason() {
        None => EmptyStateView::Populated,
        Some(EmptyStateReason::NoTasksAtAll) => EmptyStateView::NoTasksAtAll,
        Some(EmptyStateReason::NoSearchResults) => EmptyStateView::NoSearchResults,
    })
}

/// Builds the confirmation request for the delete dialog.
///
/// # FFI contract
/// - Sync call, never panics, never deletes.
/// - Malformed keys still return a request; its later confirmation is a
///   no-op.
#[flutter_rust_bridge::frb(sync)]
pub fn request_delete(key: String) -> DeleteRequestView {
    let parsed = parse_key(&key);
    let text = match parsed {
        Some(parsed) => with_controller(|controller| controller.request_delete(parsed).text),
        None => None,
    };
    DeleteRequestView {
        key,
        text,
        prompt: DELETE_PROMPT.to_string(),
    }
}

/// Removes a task after the user accepted the confirmation dialog.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Returns whether a removal occurred; stale or malformed keys return
///   `false` and change nothing.
#[flutter_rust_bridge::frb(sync)]
pub fn confirm_delete(key: String) -> bool {
    match parse_key(&key) {
        Some(key) => with_controller(|controller| controller.confirm_delete(key)),
        None => false,
    }
}
