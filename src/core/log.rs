//! Narrated game log.
//!
//! The log is the engine's only user-facing channel: every play, attack,
//! death, trigger, turn change, and rejected request is narrated here as a
//! human-readable line. The core log is append-only and unbounded; the
//! presentation layer shows a window of it via `recent`.
//!
//! Each narrated line is also emitted as a `log::debug!` record under the
//! `pixel_forge::narration` target.

use im::Vector;
use serde::{Deserialize, Serialize};

/// Append-only narrated log.
///
/// Backed by `im::Vector` so game snapshots clone in O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLog {
    entries: Vector<String>,
}

impl GameLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line.
    pub fn push(&mut self, line: impl Into<String>) {
        let line = line.into();
        log::debug!(target: "pixel_forge::narration", "{}", line);
        self.entries.push_back(line);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent line.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    /// Iterate over all lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// The last `count` lines, oldest first.
    ///
    /// ```
    /// use pixel_forge::core::GameLog;
    ///
    /// let mut log = GameLog::new();
    /// for turn in 1..=5 {
    ///     log.push(format!("Turn {}", turn));
    /// }
    ///
    /// let window: Vec<_> = log.recent(2).collect();
    /// assert_eq!(window, vec!["Turn 4", "Turn 5"]);
    /// ```
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &str> {
        let skip = self.entries.len().saturating_sub(count);
        self.entries.iter().skip(skip).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_last() {
        let mut log = GameLog::new();
        assert!(log.is_empty());
        assert_eq!(log.last(), None);

        log.push("The battle begins!");
        log.push(String::from("Your turn."));

        assert_eq!(log.len(), 2);
        assert_eq!(log.last(), Some("Your turn."));
    }

    #[test]
    fn test_recent_larger_than_log() {
        let mut log = GameLog::new();
        log.push("only line");

        let window: Vec<_> = log.recent(9).collect();
        assert_eq!(window, vec!["only line"]);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut log = GameLog::new();
        log.push("a");
        let snapshot = log.clone();
        log.push("b");

        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.len(), 2);
    }
}
