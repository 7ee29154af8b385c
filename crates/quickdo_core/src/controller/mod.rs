//! Core use-case controller.
//!
//! # Responsibility
//! - Orchestrate every mutation of the task collection through one owner.
//! - Keep UI/FFI layers decoupled from collection bookkeeping.

pub mod task_list;
