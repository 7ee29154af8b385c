//! Composer draft state for the add/edit surface.
//!
//! # Responsibility
//! - Hold the in-progress draft text and its target (new vs. existing task).
//! - Provide lifecycle helpers so the controller owns every transition.
//!
//! # Invariants
//! - `editing_key` is a lookup key, not ownership; the referenced task may
//!   be deleted independently and staleness is resolved at commit time.
//! - Draft text is stored verbatim while typing; trimming happens only on
//!   commit.

use crate::model::task::TaskId;
use serde::{Deserialize, Serialize};

/// Whether the composer is drafting a new task or editing an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComposerMode {
    /// Drafting a brand-new task.
    New,
    /// Editing the task referenced by `editing_key`.
    Edit,
}

/// Transient state of the add/edit interaction surface.
///
/// Fully determined by `editing_key` and `is_open`; there is no other
/// composer state machine.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComposerState {
    /// Text currently being composed, updated per keystroke.
    pub draft_text: String,
    /// Target task when editing; `None` when composing a new task.
    pub editing_key: Option<TaskId>,
    /// Whether the composer surface is visible/active.
    pub is_open: bool,
}

impl ComposerState {
    /// Opens the composer with an empty draft for a new task.
    pub fn open_for_new(&mut self) {
        self.draft_text.clear();
        self.editing_key = None;
        self.is_open = true;
    }

    /// Opens the composer seeded with an existing task's text.
    pub fn open_for_edit(&mut self, key: TaskId, text: impl Into<String>) {
        self.draft_text = text.into();
        self.editing_key = Some(key);
        self.is_open = true;
    }

    /// Stores draft input verbatim, interior and trailing spaces included.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft_text = text.into();
    }

    /// Discards the draft and target and hides the composer.
    pub fn close(&mut self) {
        self.draft_text.clear();
        self.editing_key = None;
        self.is_open = false;
    }

    /// Returns the current composer mode.
    pub fn mode(&self) -> ComposerMode {
        if self.editing_key.is_some() {
            ComposerMode::Edit
        } else {
            ComposerMode::New
        }
    }

    /// Input placeholder shown by the composer surface.
    pub fn placeholder(&self) -> &'static str {
        match self.mode() {
            ComposerMode::New => "Add your task",
            ComposerMode::Edit => "Edit your task",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ComposerMode, ComposerState};
    use uuid::Uuid;

    #[test]
    fn default_composer_is_closed_new_mode() {
        let composer = ComposerState::default();
        assert!(!composer.is_open);
        assert_eq!(composer.mode(), ComposerMode::New);
        assert_eq!(composer.placeholder(), "Add your task");
    }

    #[test]
    fn close_resets_draft_and_target() {
        let mut composer = ComposerState::default();
        composer.open_for_edit(Uuid::new_v4(), "old text");
        assert_eq!(composer.placeholder(), "Edit your task");

        composer.close();
        assert!(composer.draft_text.is_empty());
        assert_eq!(composer.editing_key, None);
        assert!(!composer.is_open);
    }
}
