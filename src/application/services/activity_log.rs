//! Bounded history of task outcomes shown in the activity pane.

use std::collections::VecDeque;

use chrono::{DateTime, Local};

use crate::domain::NotificationLevel;

/// One line of the activity history.
#[derive(Debug, Clone)]
pub struct ActivityEntry {
    pub at: DateTime<Local>,
    pub level: NotificationLevel,
    pub message: String,
}

#[derive(Debug)]
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
    capacity: usize,
}

impl ActivityLog {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends an entry, evicting the oldest when full.
    pub fn record(&mut self, level: NotificationLevel, message: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(ActivityEntry {
            at: Local::now(),
            level,
            message: message.into(),
        });
    }

    /// Entries, newest first.
    pub fn newest_first(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.entries.iter().rev()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evicts_oldest_at_capacity() {
        let mut log = ActivityLog::new(2);
        log.record(NotificationLevel::Info, "one");
        log.record(NotificationLevel::Info, "two");
        log.record(NotificationLevel::Error, "three");

        let messages: Vec<_> = log.newest_first().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, ["three", "two"]);
    }

    #[test]
    fn test_zero_capacity_still_keeps_latest() {
        let mut log = ActivityLog::new(0);
        log.record(NotificationLevel::Info, "only");
        log.record(NotificationLevel::Info, "latest");
        assert_eq!(log.len(), 1);
        assert_eq!(log.newest_first().next().unwrap().message, "latest");
    }
}
