//! The play log: an append-only record of everything that happened.
//!
//! Entries are human-readable strings, newest first, and purely
//! observational - no engine decision ever reads the log. It is unbounded,
//! so it sits on a persistent vector and snapshot clones stay cheap no
//! matter how long a game runs.
//!
//! `delta_since` gives a harness the entries appended by a single call:
//! capture `len()` before invoking an operation, then ask for the delta.

use im::Vector;
use serde::{Deserialize, Serialize};

/// Ordered log of game events, newest first.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlayLog {
    entries: Vector<String>,
}

impl PlayLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. It becomes the newest (front) entry.
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push_front(entry.into());
    }

    /// Number of entries logged so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The newest entry, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    /// Iterate over entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Entries appended since the log had `mark` entries, newest first.
    ///
    /// Returns an empty delta if `mark` is not below the current length.
    #[must_use]
    pub fn delta_since(&self, mark: usize) -> Vec<&str> {
        let added = self.len().saturating_sub(mark);
        self.iter().take(added).collect()
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first() {
        let mut log = PlayLog::new();
        log.push("first");
        log.push("second");

        assert_eq!(log.len(), 2);
        assert_eq!(log.latest(), Some("second"));

        let all: Vec<_> = log.iter().collect();
        assert_eq!(all, vec!["second", "first"]);
    }

    #[test]
    fn test_delta_since() {
        let mut log = PlayLog::new();
        log.push("a");

        let mark = log.len();
        log.push("b");
        log.push("c");

        assert_eq!(log.delta_since(mark), vec!["c", "b"]);
        assert_eq!(log.delta_since(log.len()), Vec::<&str>::new());
        assert_eq!(log.delta_since(100), Vec::<&str>::new());
        assert_eq!(log.delta_since(0).len(), 3);
    }

    #[test]
    fn test_clear() {
        let mut log = PlayLog::new();
        log.push("a");
        log.clear();

        assert!(log.is_empty());
        assert_eq!(log.latest(), None);
    }

    #[test]
    fn test_serialization() {
        let mut log = PlayLog::new();
        log.push("Game started. Vitality is 25.");

        let json = serde_json::to_string(&log).unwrap();
        let restored: PlayLog = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.latest(), log.latest());
    }
}
