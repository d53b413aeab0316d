//! The inbound message log.
//!
//! Entries are immutable once pushed and are kept newest-first: the most
//! recent message is always at index 0.

use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// One rendered inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Monotonic sequence number, starting at 1
    pub seq: u64,
    /// When the message was received
    pub received_at: DateTime<Local>,
    /// Rendered payload text
    pub text: String,
    /// Whether the payload was pretty-printed JSON
    pub is_json: bool,
}

/// Newest-first list of [`LogEntry`]s with an optional size bound.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    entries: VecDeque<LogEntry>,
    next_seq: u64,
    /// Oldest entries are dropped once this many are held
    max_entries: Option<usize>,
}

impl MessageLog {
    /// Unbounded log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Log that keeps at most `max_entries` entries.
    ///
    /// A bound of zero is treated as unbounded.
    pub fn with_capacity_limit(max_entries: usize) -> Self {
        Self {
            max_entries: (max_entries > 0).then_some(max_entries),
            ..Self::default()
        }
    }

    /// Insert a new entry in front of all others and return it.
    pub fn push(&mut self, text: String, is_json: bool) -> &LogEntry {
        self.next_seq += 1;
        self.entries.push_front(LogEntry {
            seq: self.next_seq,
            received_at: Local::now(),
            text,
            is_json,
        });

        if let Some(max) = self.max_entries {
            self.entries.truncate(max);
        }

        &self.entries[0]
    }

    /// Entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// The most recent entry.
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    pub fn get(&self, index: usize) -> Option<&LogEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of messages received, including dropped ones.
    pub fn total_received(&self) -> u64 {
        self.next_seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_log_is_empty() {
        let log = MessageLog::new();
        assert!(log.is_empty());
        assert!(log.latest().is_none());
        assert_eq!(log.total_received(), 0);
    }

    #[test]
    fn test_newest_first() {
        let mut log = MessageLog::new();
        for i in 1..=5 {
            log.push(format!("msg {}", i), false);
        }

        let texts: Vec<&str> = log.entries().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["msg 5", "msg 4", "msg 3", "msg 2", "msg 1"]);
        assert_eq!(log.latest().unwrap().seq, 5);
    }

    #[test]
    fn test_push_returns_new_entry() {
        let mut log = MessageLog::new();
        let entry = log.push("{}".to_string(), true);
        assert_eq!(entry.seq, 1);
        assert!(entry.is_json);
    }

    #[test]
    fn test_capacity_limit_drops_oldest() {
        let mut log = MessageLog::with_capacity_limit(2);
        log.push("a".to_string(), false);
        log.push("b".to_string(), false);
        log.push("c".to_string(), false);

        let texts: Vec<&str> = log.entries().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["c", "b"]);
        assert_eq!(log.total_received(), 3);
    }

    #[test]
    fn test_zero_limit_is_unbounded() {
        let mut log = MessageLog::with_capacity_limit(0);
        for i in 0..10 {
            log.push(i.to_string(), false);
        }
        assert_eq!(log.len(), 10);
    }

    #[test]
    fn test_get_by_index() {
        let mut log = MessageLog::new();
        log.push("old".to_string(), false);
        log.push("new".to_string(), false);
        assert_eq!(log.get(0).unwrap().text, "new");
        assert_eq!(log.get(1).unwrap().text, "old");
        assert!(log.get(2).is_none());
    }
}
