//! Live substring filtering over the task collection.
//!
//! # Responsibility
//! - Hold the current search query independently of the composer.
//! - Decide visibility of a task for a given query.
//!
//! # Invariants
//! - Matching is case-insensitive substring containment.
//! - Filtering never mutates the task collection.
//! - An empty query matches every task.

use serde::{Deserialize, Serialize};

/// Current search query for the list view.
///
/// Updated per keystroke; the filtered view is recomputed on demand rather
/// than cached, since the underlying collection can change between reads.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchState {
    /// Raw query text as typed.
    pub query: String,
}

impl SearchState {
    /// Replaces the query text verbatim.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Returns whether a non-empty query is active.
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }

    /// Returns whether `text` is visible under the current query.
    pub fn matches(&self, text: &str) -> bool {
        matches_query(text, &self.query)
    }
}

/// Case-insensitive substring containment check.
///
/// Lowercases both sides so queries like `BUY` still hit `Buy milk`,
/// mirroring the type-as-you-search behavior of the list screen.
pub fn matches_query(text: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    text.to_lowercase().contains(&query.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::{matches_query, SearchState};

    #[test]
    fn empty_query_matches_everything() {
        assert!(matches_query("Buy milk", ""));
        assert!(matches_query("", ""));
    }

    #[test]
    fn match_is_case_insensitive_substring() {
        assert!(matches_query("Buy milk", "BUY"));
        assert!(matches_query("Call mom", "all m"));
        assert!(!matches_query("Call mom", "milk"));
    }

    #[test]
    fn state_tracks_active_query() {
        let mut search = SearchState::default();
        assert!(!search.is_active());

        search.set_query("milk");
        assert!(search.is_active());
        assert!(search.matches("Buy MILK"));
        assert!(!search.matches("Call mom"));
    }
}
