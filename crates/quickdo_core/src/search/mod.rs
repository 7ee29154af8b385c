//! Search entry points for the task list view.
//!
//! # Responsibility
//! - Expose the query state and substring matching used to derive the
//!   filtered view.
//! - Keep result shaping inside core; the UI only renders.

pub mod filter;
