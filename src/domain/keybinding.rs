use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    SwitchFocus,
    Activate,
    Back,
    Confirm,
    Decline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub key: KeyEvent,
    pub action: Action,
    pub label: Cow<'static, str>,
    pub key_display: Option<&'static str>,
    pub visible_in_bar: bool,
}

impl Keybind {
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
            key_display: None,
            visible_in_bar: true,
        }
    }

    #[must_use]
    pub fn display(mut self, text: &'static str) -> Self {
        self.key_display = Some(text);
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible_in_bar = false;
        self
    }

    fn matches(&self, key: &KeyEvent) -> bool {
        self.key.code == key.code && key.modifiers.contains(self.key.modifiers)
    }
}

fn plain(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Bindings active while browsing menus.
#[must_use]
pub fn menu_keybinds() -> Vec<Keybind> {
    vec![
        Keybind::new(plain(KeyCode::Up), Action::MoveUp, "Up").display("↑/k"),
        Keybind::new(plain(KeyCode::Char('k')), Action::MoveUp, "Up").hidden(),
        Keybind::new(plain(KeyCode::Down), Action::MoveDown, "Down").display("↓/j"),
        Keybind::new(plain(KeyCode::Char('j')), Action::MoveDown, "Down").hidden(),
        Keybind::new(plain(KeyCode::Tab), Action::SwitchFocus, "Switch"),
        Keybind::new(plain(KeyCode::BackTab), Action::SwitchFocus, "Switch").hidden(),
        Keybind::new(plain(KeyCode::Enter), Action::Activate, "Select"),
        Keybind::new(plain(KeyCode::Backspace), Action::Back, "Main Menu"),
        Keybind::new(plain(KeyCode::Char('q')), Action::Quit, "Quit"),
        Keybind::new(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Action::Quit,
            "Quit",
        )
        .hidden(),
    ]
}

/// Bindings active while a confirmation dialog is open.
#[must_use]
pub fn confirm_keybinds() -> Vec<Keybind> {
    vec![
        Keybind::new(plain(KeyCode::Char('y')), Action::Confirm, "Yes"),
        Keybind::new(plain(KeyCode::Char('n')), Action::Decline, "No"),
        Keybind::new(plain(KeyCode::Esc), Action::Decline, "No").hidden(),
        Keybind::new(plain(KeyCode::Left), Action::MoveUp, "Choose").display("←/→"),
        Keybind::new(plain(KeyCode::Right), Action::MoveDown, "Choose").hidden(),
        Keybind::new(plain(KeyCode::Enter), Action::Activate, "Answer"),
    ]
}

/// Finds the action bound to `key`, if any.
#[must_use]
pub fn resolve(bindings: &[Keybind], key: &KeyEvent) -> Option<Action> {
    bindings
        .iter()
        .find(|binding| binding.matches(key))
        .map(|binding| binding.action)
}
