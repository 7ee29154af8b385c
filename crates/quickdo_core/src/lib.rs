//! Core domain logic for QuickDo.
//! This crate is the single source of truth for business invariants.

pub mod controller;
pub mod logging;
pub mod model;
pub mod search;

pub use controller::task_list::{
    CommitOutcome, DeleteRequest, EmptyStateReason, TaskListController,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::composer::{ComposerMode, ComposerState};
pub use model::task::{Task, TaskId, TaskValidationError};
pub use search::filter::{matches_query, SearchState};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
