use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warn,
    Error,
}

/// Transient message shown in the popup corner.
#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
    pub shown_at: Option<Instant>,
    pub ttl: Duration,
}

impl Notification {
    #[must_use]
    pub fn new(
        level: NotificationLevel,
        title: impl Into<String>,
        message: impl Into<String>,
        ttl: Duration,
    ) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
            shown_at: None,
            ttl,
        }
    }

    /// Starts the display clock. Later calls keep the first timestamp.
    pub fn show(&mut self) {
        self.shown_at.get_or_insert_with(Instant::now);
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.shown_at.is_some_and(|at| at.elapsed() > self.ttl)
    }
}
