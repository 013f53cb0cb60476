//! Sidebar plus content panel.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget,
        Wrap,
    },
};

use crate::application::services::ActivityLog;
use crate::domain::keybinding::Action;
use crate::domain::{MenuAction, MenuItem, ViewContent};
use crate::presentation::widgets::ActivityPane;

const SIDEBAR_WIDTH: u16 = 26;
const ACTIVITY_HEIGHT: u16 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuFocus {
    #[default]
    Sidebar,
    Content,
}

/// What a key did to the menu screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKeyResult {
    ActivateSidebar(usize),
    ActivateContent(usize),
    Back,
    Quit,
    Consumed,
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct MenuScreenState {
    focus: MenuFocus,
    sidebar_selected: usize,
    content_selected: usize,
}

impl MenuScreenState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn focus(&self) -> MenuFocus {
        self.focus
    }

    #[must_use]
    pub const fn sidebar_selected(&self) -> usize {
        self.sidebar_selected
    }

    #[must_use]
    pub const fn content_selected(&self) -> usize {
        self.content_selected
    }

    /// Resets the content cursor after the mounted view changed.
    ///
    /// Focus follows the new content when it has anything to select.
    pub fn on_navigate(&mut self, content_len: usize) {
        self.content_selected = 0;
        self.focus = if content_len > 0 {
            MenuFocus::Content
        } else {
            MenuFocus::Sidebar
        };
    }

    pub fn apply(&mut self, action: Action, sidebar_len: usize, content_len: usize) -> MenuKeyResult {
        match action {
            Action::Quit => MenuKeyResult::Quit,
            Action::Back => MenuKeyResult::Back,
            Action::SwitchFocus => {
                self.focus = match self.focus {
                    MenuFocus::Sidebar if content_len > 0 => MenuFocus::Content,
                    _ => MenuFocus::Sidebar,
                };
                MenuKeyResult::Consumed
            }
            Action::MoveUp | Action::MoveDown => {
                let (selected, len) = match self.focus {
                    MenuFocus::Sidebar => (&mut self.sidebar_selected, sidebar_len),
                    MenuFocus::Content => (&mut self.content_selected, content_len),
                };
                if len == 0 {
                    return MenuKeyResult::Ignored;
                }
                *selected = if action == Action::MoveUp {
                    (*selected + len - 1) % len
                } else {
                    (*selected + 1) % len
                };
                MenuKeyResult::Consumed
            }
            Action::Activate => match self.focus {
                MenuFocus::Sidebar if self.sidebar_selected < sidebar_len => {
                    MenuKeyResult::ActivateSidebar(self.sidebar_selected)
                }
                MenuFocus::Content if self.content_selected < content_len => {
                    MenuKeyResult::ActivateContent(self.content_selected)
                }
                _ => MenuKeyResult::Ignored,
            },
            Action::Confirm | Action::Decline => MenuKeyResult::Ignored,
        }
    }
}

pub struct MenuScreen<'a> {
    sidebar: &'a [MenuItem],
    content: Option<&'a ViewContent>,
    activity: &'a ActivityLog,
    running: Option<&'a str>,
}

impl<'a> MenuScreen<'a> {
    #[must_use]
    pub const fn new(
        sidebar: &'a [MenuItem],
        content: Option<&'a ViewContent>,
        activity: &'a ActivityLog,
    ) -> Self {
        Self {
            sidebar,
            content,
            activity,
            running: None,
        }
    }

    /// Marks a task as in flight.
    #[must_use]
    pub const fn running(mut self, label: Option<&'a str>) -> Self {
        self.running = label;
        self
    }

    fn pane_block(title: String, focused: bool) -> Block<'static> {
        let color = if focused { Color::Cyan } else { Color::DarkGray };
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .title(title)
    }

    fn item_line(item: &MenuItem) -> Line<'_> {
        match item.action {
            MenuAction::Placeholder => Line::from(Span::styled(
                item.label.as_str(),
                Style::default().fg(Color::DarkGray),
            )),
            _ => Line::from(item.label.as_str()),
        }
    }

    fn render_list(
        items: &[MenuItem],
        selected: usize,
        focused: bool,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let list_items: Vec<ListItem<'_>> = items
            .iter()
            .map(|item| ListItem::new(Self::item_line(item)))
            .collect();

        let highlight = if focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let list = List::new(list_items)
            .highlight_style(highlight)
            .highlight_symbol("> ");

        let mut state = ListState::default().with_selected((!items.is_empty()).then_some(selected));
        StatefulWidget::render(list, area, buf, &mut state);
    }

    fn render_content(&self, area: Rect, buf: &mut Buffer, state: &MenuScreenState) {
        let focused = state.focus == MenuFocus::Content;
        let Some(content) = self.content else {
            Self::pane_block(" Toolbox ".to_string(), focused).render(area, buf);
            return;
        };

        let title = match self.running {
            Some(label) => format!(" {} - running {label}... ", content.title),
            None => format!(" {} ", content.title),
        };
        let block = Self::pane_block(title, focused);
        let inner = block.inner(area);
        block.render(area, buf);

        let subtitle_height = if content.subtitle.is_some() { 2 } else { 0 };
        let [subtitle_area, list_area] =
            Layout::vertical([Constraint::Length(subtitle_height), Constraint::Fill(1)])
                .areas(inner);

        if let Some(subtitle) = &content.subtitle {
            Paragraph::new(subtitle.as_str())
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true })
                .render(subtitle_area, buf);
        }

        Self::render_list(
            &content.items,
            state.content_selected,
            focused,
            list_area,
            buf,
        );
    }
}

impl StatefulWidget for MenuScreen<'_> {
    type State = MenuScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [sidebar_area, main_area] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Fill(1)])
                .areas(area);
        let [content_area, activity_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(ACTIVITY_HEIGHT)])
                .areas(main_area);

        let sidebar_focused = state.focus == MenuFocus::Sidebar;
        let block = Self::pane_block(" Main Menu ".to_string(), sidebar_focused);
        let inner = block.inner(sidebar_area);
        block.render(sidebar_area, buf);
        Self::render_list(
            self.sidebar,
            state.sidebar_selected,
            sidebar_focused,
            inner,
            buf,
        );

        self.render_content(content_area, buf, state);
        ActivityPane::new(self.activity).render(activity_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MenuTable, ViewKey};
    use ratatui::{Terminal, backend::TestBackend};
    use test_case::test_case;

    #[test_case(MenuFocus::Sidebar, Action::MoveDown, 1 ; "down moves to next")]
    #[test_case(MenuFocus::Sidebar, Action::MoveUp, 4 ; "up wraps to last")]
    #[test_case(MenuFocus::Content, Action::MoveUp, 2 ; "content up wraps")]
    fn test_move_wraps(focus: MenuFocus, action: Action, expected: usize) {
        let mut state = MenuScreenState {
            focus,
            ..MenuScreenState::default()
        };
        assert_eq!(state.apply(action, 5, 3), MenuKeyResult::Consumed);
        let selected = match focus {
            MenuFocus::Sidebar => state.sidebar_selected(),
            MenuFocus::Content => state.content_selected(),
        };
        assert_eq!(selected, expected);
    }

    #[test]
    fn test_activate_reports_focused_pane() {
        let mut state = MenuScreenState::new();
        state.apply(Action::MoveDown, 5, 3);
        assert_eq!(state.apply(Action::Activate, 5, 3), MenuKeyResult::ActivateSidebar(1));

        state.apply(Action::SwitchFocus, 5, 3);
        assert_eq!(state.apply(Action::Activate, 5, 3), MenuKeyResult::ActivateContent(0));
    }

    #[test]
    fn test_empty_content_keeps_focus_on_sidebar() {
        let mut state = MenuScreenState::new();
        state.on_navigate(0);
        assert_eq!(state.focus(), MenuFocus::Sidebar);
        state.apply(Action::SwitchFocus, 5, 0);
        assert_eq!(state.focus(), MenuFocus::Sidebar);
        assert_eq!(state.apply(Action::MoveDown, 0, 0), MenuKeyResult::Ignored);
    }

    #[test]
    fn test_navigate_resets_content_cursor() {
        let mut state = MenuScreenState::new();
        state.on_navigate(3);
        state.apply(Action::MoveDown, 5, 3);
        assert_eq!(state.content_selected(), 1);

        state.on_navigate(2);
        assert_eq!(state.content_selected(), 0);
        assert_eq!(state.focus(), MenuFocus::Content);
    }

    #[test]
    fn test_render_shows_sidebar_and_view() {
        let table = MenuTable::default();
        let graph = table
            .views
            .iter()
            .find(|view| view.key == ViewKey::Graph)
            .map(ViewContent::from)
            .unwrap();
        let activity = ActivityLog::new(10);
        let mut state = MenuScreenState::new();
        state.on_navigate(graph.items.len());

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| {
                frame.render_stateful_widget(
                    MenuScreen::new(&table.sidebar, Some(&graph), &activity)
                        .running(Some("Connect to Microsoft Graph")),
                    frame.area(),
                    &mut state,
                );
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect();
        assert!(text.contains("Install Modules"));
        assert!(text.contains("Graph Menu"));
        assert!(text.contains("> Connect to Microsoft Graph"));
        assert!(text.contains("Back to Main Menu"));
        assert!(text.contains("No tasks run yet."));
    }
}
