//! Status bar widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Status bar severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Informational.
    Info,
    /// Success.
    Success,
    /// Warning.
    Warning,
    /// Error.
    Error,
}

impl StatusLevel {
    /// Returns color for level.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Info => Color::Cyan,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

/// One-line status message colored by severity.
#[derive(Debug, Clone)]
pub struct StatusBar {
    message: String,
    level: StatusLevel,
}

impl StatusBar {
    /// Creates a status bar with the given level.
    #[must_use]
    pub fn new(level: StatusLevel, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level,
        }
    }

    /// Creates info status bar.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(StatusLevel::Info, message)
    }

    /// Creates success status bar.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(StatusLevel::Success, message)
    }

    /// Creates warning status bar.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(StatusLevel::Warning, message)
    }

    /// Creates error status bar.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(StatusLevel::Error, message)
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::info("")
    }
}

impl Widget for &StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .fg(self.level.color())
            .add_modifier(Modifier::BOLD);

        Paragraph::new(Line::from(Span::styled(self.message.as_str(), style))).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_colored_by_level() {
        let area = Rect::new(0, 0, 20, 1);
        for (bar, color) in [
            (StatusBar::error("failed"), Color::Red),
            (StatusBar::success("done"), Color::Green),
        ] {
            let mut buf = Buffer::empty(area);
            (&bar).render(area, &mut buf);

            assert_eq!(buf[(0, 0)].symbol(), &bar.message()[..1]);
            assert_eq!(buf[(0, 0)].fg, color);
        }
    }
}
