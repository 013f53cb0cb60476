//! Yes/no prompt shown over the menu screen.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::domain::keybinding::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Yes,
    No,
}

/// What the user did with the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAnswer {
    Pending,
    Yes,
    No,
}

#[derive(Debug, Clone)]
pub struct ConfirmDialog {
    title: String,
    prompt: String,
    selected: Choice,
}

impl ConfirmDialog {
    /// Creates a dialog with "No" preselected.
    #[must_use]
    pub fn new(title: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            prompt: prompt.into(),
            selected: Choice::No,
        }
    }

    pub fn apply(&mut self, action: Action) -> ConfirmAnswer {
        match action {
            Action::Confirm => ConfirmAnswer::Yes,
            Action::Decline => ConfirmAnswer::No,
            Action::MoveUp | Action::MoveDown | Action::SwitchFocus => {
                self.selected = match self.selected {
                    Choice::Yes => Choice::No,
                    Choice::No => Choice::Yes,
                };
                ConfirmAnswer::Pending
            }
            Action::Activate => match self.selected {
                Choice::Yes => ConfirmAnswer::Yes,
                Choice::No => ConfirmAnswer::No,
            },
            Action::Quit | Action::Back => ConfirmAnswer::Pending,
        }
    }

    fn button(&self, label: &'static str, choice: Choice) -> Span<'static> {
        let style = if self.selected == choice {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        Span::styled(label, style)
    }
}

impl Widget for &ConfirmDialog {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = 56.min(area.width);
        let height = 8.min(area.height);
        let [_, row, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .areas(area);
        let [_, dialog_area, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(width),
            Constraint::Fill(1),
        ])
        .areas(row);

        Clear.render(dialog_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Yellow))
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Center);
        let inner = block.inner(dialog_area);
        block.render(dialog_area, buf);

        let [prompt_area, buttons_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(inner);

        Paragraph::new(self.prompt.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(prompt_area, buf);

        Line::from(vec![
            self.button(" Yes ", Choice::Yes),
            Span::raw("   "),
            self.button(" No ", Choice::No),
        ])
        .alignment(Alignment::Center)
        .render(buttons_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn dialog() -> ConfirmDialog {
        ConfirmDialog::new("Prerequisite", "NuGet is not installed. Install it now?")
    }

    #[test_case(Action::Confirm, ConfirmAnswer::Yes ; "y answers yes")]
    #[test_case(Action::Decline, ConfirmAnswer::No ; "n answers no")]
    #[test_case(Action::Activate, ConfirmAnswer::No ; "enter takes the default")]
    #[test_case(Action::Quit, ConfirmAnswer::Pending ; "quit is ignored")]
    fn test_apply(action: Action, expected: ConfirmAnswer) {
        assert_eq!(dialog().apply(action), expected);
    }

    #[test]
    fn test_toggle_then_activate_answers_yes() {
        let mut dialog = dialog();
        assert_eq!(dialog.apply(Action::MoveUp), ConfirmAnswer::Pending);
        assert_eq!(dialog.apply(Action::Activate), ConfirmAnswer::Yes);
    }

    #[test]
    fn test_render_shows_prompt_and_buttons() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        (&dialog()).render(area, &mut buf);

        let text: String = (0..24)
            .flat_map(|y| (0..80).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect();
        assert!(text.contains("Install it now?"));
        assert!(text.contains(" Yes "));
        assert!(text.contains(" No "));
    }
}
