//! UI screens.

mod app;
mod backend;
mod confirm_dialog;
mod menu_screen;
mod notification_popup;

pub use app::{App, UiState};
pub use backend::{Action, Backend, BackendCommand};
pub use confirm_dialog::{ConfirmAnswer, ConfirmDialog};
pub use menu_screen::{MenuFocus, MenuKeyResult, MenuScreen, MenuScreenState};
pub use notification_popup::NotificationPopup;
