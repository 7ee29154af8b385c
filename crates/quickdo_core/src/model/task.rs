//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical to-do record rendered by the list view.
//! - Enforce the non-empty-text invariant at construction time.
//!
//! # Invariants
//! - `key` is stable and never reused for another task.
//! - `text` is trimmed and non-empty for every stored task.
//! - `created_at` is captured once at creation and never updated on edit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every task in the collection.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Validation error raised when task text is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Text is empty or whitespace-only after trimming.
    EmptyText,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "empty task"),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical record for one to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable unique key used for edit/delete targeting.
    pub key: TaskId,
    /// Human-readable description, trimmed and non-empty.
    pub text: String,
    /// Creation instant; immutable across edits.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task with a freshly generated key and the current time.
    ///
    /// # Errors
    /// - `TaskValidationError::EmptyText` when `text` trims to empty.
    pub fn new(text: impl Into<String>) -> Result<Self, TaskValidationError> {
        Self::with_key(Uuid::new_v4(), text)
    }

    /// Creates a task with a caller-provided stable key.
    ///
    /// # Invariants
    /// - The provided `key` must remain unique within the owning collection.
    ///
    /// # Errors
    /// - `TaskValidationError::EmptyText` when `text` trims to empty.
    pub fn with_key(key: TaskId, text: impl Into<String>) -> Result<Self, TaskValidationError> {
        let text = normalize_text(text.into())?;
        Ok(Self {
            key,
            text,
            created_at: Utc::now(),
        })
    }

    /// Replaces the task text, keeping `key` and `created_at` untouched.
    ///
    /// # Errors
    /// - `TaskValidationError::EmptyText` when `text` trims to empty.
    pub fn rename(&mut self, text: impl Into<String>) -> Result<(), TaskValidationError> {
        self.text = normalize_text(text.into())?;
        Ok(())
    }

    /// Renders the creation date the way the list view displays it,
    /// e.g. `Wed Aug 27 2026`.
    pub fn created_label(&self) -> String {
        self.created_at.format("%a %b %d %Y").to_string()
    }
}

/// Trims input and rejects whitespace-only text.
fn normalize_text(raw: String) -> Result<String, TaskValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskValidationError::EmptyText);
    }
    Ok(trimmed.to_string())
}
