//! Task list controller: the single owner of list, composer and search state.
//!
//! # Responsibility
//! - Mediate add/edit/delete/search operations over the in-memory list.
//! - Resolve stale task references with explicit no-op/merge policies.
//!
//! # Invariants
//! - Task keys are unique and never reused, even after deletion.
//! - The collection keeps insertion order; no sorting is applied anywhere.
//! - Committing with a stale `editing_key` creates a new task instead of
//!   discarding the draft; an edit is never silently lost.
//! - Log events carry metadata only, never user task text.

use crate::model::composer::ComposerState;
use crate::model::task::{Task, TaskId, TaskValidationError};
use crate::search::filter::SearchState;
use log::debug;

/// Successful result of [`TaskListController::commit_draft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// A new task was appended with this key.
    Created(TaskId),
    /// An existing task's text was replaced in place.
    Updated(TaskId),
}

impl CommitOutcome {
    /// Key of the task the commit landed on.
    pub fn key(&self) -> TaskId {
        match self {
            Self::Created(key) | Self::Updated(key) => *key,
        }
    }
}

/// Confirmation request produced by [`TaskListController::request_delete`].
///
/// Deletion is destructive and irreversible here, so the controller never
/// removes on the first call; the presentation layer shows a confirmation
/// dialog and calls [`TaskListController::confirm_delete`] on acceptance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    /// Key the caller should pass back to `confirm_delete`.
    pub key: TaskId,
    /// Current text of the targeted task; `None` when the key is stale.
    pub text: Option<String>,
}

/// Why the visible list is empty, when it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyStateReason {
    /// No tasks exist at all.
    NoTasksAtAll,
    /// Tasks exist but the active query matched none of them.
    NoSearchResults,
}

/// Owner of the task collection and the transient composer/search state.
///
/// All operations are synchronous and total; the only error surface is
/// draft validation on commit. Stale-key lookups are defined no-ops.
#[derive(Debug, Default)]
pub struct TaskListController {
    tasks: Vec<Task>,
    composer: ComposerState,
    search: SearchState,
}

impl TaskListController {
    /// Creates an empty controller with a closed composer and no query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the composer with a blank draft for a new task.
    pub fn open_composer_for_new(&mut self) {
        self.composer.open_for_new();
        debug!("event=composer_opened module=controller mode=new");
    }

    /// Opens the composer seeded with an existing task's text.
    ///
    /// Returns `false` without any state change when `key` no longer
    /// resolves; the list may have changed under a stale reference and
    /// that is not an error.
    pub fn open_composer_for_edit(&mut self, key: TaskId) -> bool {
        let Some(task) = self.tasks.iter().find(|task| task.key == key) else {
            debug!("event=composer_open_skipped module=controller reason=stale_key key={key}");
            return false;
        };
        let text = task.text.clone();
        self.composer.open_for_edit(key, text);
        debug!("event=composer_opened module=controller mode=edit key={key}");
        true
    }

    /// Stores draft input verbatim; trimming is deferred to commit so live
    /// typing keeps interior and trailing spaces.
    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.composer.set_draft(text);
    }

    /// Commits the current draft as a create or in-place update.
    ///
    /// # Contract
    /// - Whitespace-only drafts fail with `EmptyText`; the composer stays
    ///   open and the collection is untouched.
    /// - A live `editing_key` updates that task, preserving `key` and
    ///   `created_at`.
    /// - A stale `editing_key` (task deleted mid-edit) falls back to
    ///   creating a new task.
    /// - On success the composer closes and resets.
    pub fn commit_draft(&mut self) -> Result<CommitOutcome, TaskValidationError> {
        let trimmed = self.composer.draft_text.trim();
        if trimmed.is_empty() {
            debug!("event=commit_rejected module=controller reason=empty_draft");
            return Err(TaskValidationError::EmptyText);
        }
        let trimmed = trimmed.to_string();

        let recovered_edit = if let Some(key) = self.composer.editing_key {
            if let Some(task) = self.tasks.iter_mut().find(|task| task.key == key) {
                task.rename(trimmed)?;
                self.composer.close();
                debug!("event=task_updated module=controller key={key}");
                return Ok(CommitOutcome::Updated(key));
            }
            // Target was deleted mid-edit; fall through to creation so the
            // draft still lands somewhere.
            true
        } else {
            false
        };

        let task = Task::new(trimmed)?;
        let key = task.key;
        self.tasks.push(task);
        self.composer.close();
        debug!("event=task_created module=controller key={key} recovered_edit={recovered_edit}");
        Ok(CommitOutcome::Created(key))
    }

    /// Discards the draft and target without touching the collection.
    pub fn cancel_composer(&mut self) {
        self.composer.close();
        debug!("event=composer_cancelled module=controller");
    }

    /// Builds a confirmation request for the presentation layer's dialog.
    ///
    /// Does not delete anything. `text` is `None` when the key is already
    /// stale, in which case the later `confirm_delete` will be a no-op.
    pub fn request_delete(&self, key: TaskId) -> DeleteRequest {
        DeleteRequest {
            key,
            text: self.get_task(key).map(|task| task.text.clone()),
        }
    }

    /// Removes the task with `key` if present.
    ///
    /// Returns whether a removal occurred; a stale key is a `false` no-op,
    /// so repeated confirmation of the same key is idempotent.
    pub fn confirm_delete(&mut self, key: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.key != key);
        let removed = self.tasks.len() < before;
        if removed {
            debug!("event=task_deleted module=controller key={key}");
        } else {
            debug!("event=delete_skipped module=controller reason=stale_key key={key}");
        }
        removed
    }

    /// Replaces the search query; never touches the task collection.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search.set_query(query);
    }

    /// Lazily yields tasks visible under the current query.
    ///
    /// Empty query: every task in insertion order. Otherwise: the
    /// insertion-ordered subsequence whose text contains the query
    /// case-insensitively. Recomputed on every call, never cached.
    pub fn visible_tasks(&self) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(|task| self.search.matches(&task.text))
    }

    /// Explains an empty visible list so the view can pick the right
    /// placeholder message.
    ///
    /// Returns `None` whenever at least one task is visible. An active
    /// query that matches nothing wins over the bare-list message, so a
    /// search over an empty list still reads as "no results".
    pub fn empty_state_reason(&self) -> Option<EmptyStateReason> {
        if self.search.is_active() && self.visible_tasks().next().is_none() {
            return Some(EmptyStateReason::NoSearchResults);
        }
        if self.tasks.is_empty() {
            return Some(EmptyStateReason::NoTasksAtAll);
        }
        None
    }

    /// Read-only snapshot of the composer surface state.
    pub fn composer(&self) -> &ComposerState {
        &self.composer
    }

    /// Current search query text.
    pub fn search_query(&self) -> &str {
        &self.search.query
    }

    /// Number of stored tasks, ignoring the active query.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Looks up one task by key.
    pub fn get_task(&self, key: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.key == key)
    }
}
