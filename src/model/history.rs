// SPDX-FileCopyrightText: 2026 The Tagmark Authors
// SPDX-License-Identifier: MIT

/// Maximum number of remembered opens per section; rank classes map 1:1 to slots.
pub const HISTORY_CAPACITY: usize = 3;

/// Bounded most-recent-first list of item names confirmed open in one section.
///
/// [`RecencyHistory::record`] is the sole mutator. Re-recording the current head
/// is a no-op, so the caller can use the return value to suppress redundant
/// re-highlighting while the same item stays open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecencyHistory {
    entries: Vec<String>,
}

impl RecencyHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an open. Returns `true` iff the history changed.
    ///
    /// `None` and the empty string both mean "no item open" and leave the
    /// history untouched, as does a value equal to the current head; otherwise
    /// the value is inserted at the head and the oldest entry beyond
    /// [`HISTORY_CAPACITY`] is evicted.
    pub fn record(&mut self, name: Option<&str>) -> bool {
        let Some(name) = name else {
            return false;
        };
        if name.is_empty() {
            return false;
        }
        if self.entries.first().is_some_and(|head| head == name) {
            return false;
        }
        self.entries.insert(0, name.to_owned());
        self.entries.truncate(HISTORY_CAPACITY);
        true
    }

    pub fn head(&self) -> Option<&str> {
        self.entries.first().map(String::as_str)
    }

    /// Entries most-recent-first; index equals highlight rank.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{RecencyHistory, HISTORY_CAPACITY};

    #[test]
    fn record_inserts_at_head() {
        let mut history = RecencyHistory::new();
        assert!(history.record(Some("A")));
        assert!(history.record(Some("B")));
        assert_eq!(history.iter().collect::<Vec<_>>(), ["B", "A"]);
        assert_eq!(history.head(), Some("B"));
    }

    #[test]
    fn record_none_is_a_no_op() {
        let mut history = RecencyHistory::new();
        assert!(!history.record(None));
        assert!(history.is_empty());

        history.record(Some("A"));
        assert!(!history.record(None));
        assert_eq!(history.head(), Some("A"));
    }

    #[test]
    fn record_empty_name_is_a_no_op() {
        let mut history = RecencyHistory::new();
        assert!(!history.record(Some("")));
        assert!(history.is_empty());

        history.record(Some("A"));
        assert!(!history.record(Some("")));
        assert_eq!(history.head(), Some("A"));
    }

    #[test]
    fn record_same_head_twice_mutates_only_once() {
        let mut history = RecencyHistory::new();
        assert!(history.record(Some("A")));
        assert!(!history.record(Some("A")));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn record_head_guard_is_head_only() {
        // Reopening an older entry re-inserts it; only the head suppresses.
        let mut history = RecencyHistory::new();
        history.record(Some("A"));
        history.record(Some("B"));
        assert!(history.record(Some("A")));
        assert_eq!(history.iter().collect::<Vec<_>>(), ["A", "B", "A"]);
    }

    #[test]
    fn capacity_bound_holds_under_any_sequence() {
        let mut history = RecencyHistory::new();
        for name in ["A", "B", "C", "D", "E", "D", "D", "F"] {
            history.record(Some(name));
            assert!(history.len() <= HISTORY_CAPACITY);
        }
        assert_eq!(history.iter().collect::<Vec<_>>(), ["F", "D", "E"]);
    }

    #[test]
    fn oldest_entry_is_evicted_at_capacity() {
        let mut history = RecencyHistory::new();
        for name in ["A", "B", "C"] {
            history.record(Some(name));
        }
        assert!(history.record(Some("D")));
        assert_eq!(history.iter().collect::<Vec<_>>(), ["D", "C", "B"]);
    }
}
