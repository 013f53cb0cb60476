mod activity_pane;
mod footer_bar;
mod status_bar;

pub use activity_pane::ActivityPane;
pub use footer_bar::{FocusContext, FooterBar, FooterBarStyle};
pub use status_bar::{StatusBar, StatusLevel};
