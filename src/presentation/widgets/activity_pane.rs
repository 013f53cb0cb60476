//! Recent task outcomes.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

use crate::application::services::{ActivityEntry, ActivityLog};
use crate::domain::NotificationLevel;

pub struct ActivityPane<'a> {
    log: &'a ActivityLog,
    border_style: Style,
}

impl<'a> ActivityPane<'a> {
    #[must_use]
    pub fn new(log: &'a ActivityLog) -> Self {
        Self {
            log,
            border_style: Style::default().fg(Color::DarkGray),
        }
    }

    fn level_span(level: NotificationLevel) -> Span<'static> {
        let (text, color) = match level {
            NotificationLevel::Info => ("info", Color::Cyan),
            NotificationLevel::Success => ("ok  ", Color::Green),
            NotificationLevel::Warn => ("warn", Color::Yellow),
            NotificationLevel::Error => ("fail", Color::Red),
        };
        Span::styled(text, Style::default().fg(color))
    }

    fn entry_line(entry: &ActivityEntry) -> Line<'_> {
        Line::from(vec![
            Span::styled(
                entry.at.format("%H:%M:%S ").to_string(),
                Style::default().fg(Color::DarkGray),
            ),
            Self::level_span(entry.level),
            Span::raw(" "),
            Span::raw(entry.message.as_str()),
        ])
    }
}

impl Widget for ActivityPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style)
            .title(" Activity ");

        if self.log.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            Line::styled("No tasks run yet.", Style::default().fg(Color::DarkGray))
                .render(inner, buf);
            return;
        }

        let items: Vec<ListItem<'_>> = self
            .log
            .newest_first()
            .map(|entry| ListItem::new(Self::entry_line(entry)))
            .collect();

        List::new(items).block(block).render(area, buf);
    }
}
