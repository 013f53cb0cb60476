use std::collections::VecDeque;
use std::time::Duration;

use crate::domain::{Notification, NotificationLevel};

/// FIFO of popups; only the front one is visible.
#[derive(Debug)]
pub struct NotificationManager {
    queue: VecDeque<Notification>,
    ttl: Duration,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

impl NotificationManager {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            ttl,
        }
    }

    pub fn push(
        &mut self,
        level: NotificationLevel,
        title: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.queue
            .push_back(Notification::new(level, title, message, self.ttl));
    }

    pub fn info(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(NotificationLevel::Info, title, message);
    }

    pub fn success(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(NotificationLevel::Success, title, message);
    }

    pub fn warn(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(NotificationLevel::Warn, title, message);
    }

    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(NotificationLevel::Error, title, message);
    }

    /// Advances the display clock, dropping the front popup once expired.
    ///
    /// Returns whether the visible popup changed.
    pub fn tick(&mut self) -> bool {
        let Some(front) = self.queue.front_mut() else {
            return false;
        };
        front.show();
        if !front.is_expired() {
            return false;
        }

        self.queue.pop_front();
        if let Some(next) = self.queue.front_mut() {
            next.show();
        }
        true
    }

    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.queue.front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_front_popup_is_visible() {
        let mut manager = NotificationManager::default();
        manager.error("Install Graph Module", "Access denied");

        assert!(!manager.tick());
        let current = manager.current().unwrap();
        assert_eq!(current.level, NotificationLevel::Error);
        assert_eq!(current.message, "Access denied");
    }

    #[test]
    fn test_expired_popup_yields_to_next() {
        let mut manager = NotificationManager::default();
        manager.info("1", "First");
        manager.warn("2", "Second");
        manager.tick();

        manager.queue.front_mut().unwrap().shown_at =
            Some(Instant::now().checked_sub(Duration::from_secs(10)).unwrap());

        assert!(manager.tick());
        assert_eq!(manager.len(), 1);
        let second = manager.current().unwrap();
        assert_eq!(second.title, "2");
        assert!(second.shown_at.is_some());
    }
}
