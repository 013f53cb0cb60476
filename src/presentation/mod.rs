//! Presentation layer with UI components and event handling.

/// Event handling.
pub mod events;
/// Runtime startup and shutdown.
pub mod runtime;
/// UI screens.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use ui::App;
