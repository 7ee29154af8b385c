//! Domain model for the task list.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep the task record and the transient composer state in one place.
//!
//! # Invariants
//! - Every stored task is identified by a stable `TaskId`.
//! - Stored task text is trimmed and never empty.

pub mod composer;
pub mod task;
