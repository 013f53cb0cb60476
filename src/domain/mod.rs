//! Domain layer with menu data, tasks, and port definitions.

/// Interpreter invocation outcome.
pub mod command;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Menu table definitions.
pub mod menu;
pub mod notification;
/// Port definitions.
pub mod ports;
/// Automation tasks.
pub mod task;
/// View identifiers.
pub mod view;

pub use command::CommandResult;
pub use errors::NavigationError;
pub use menu::{MenuAction, MenuItem, MenuTable, ViewContent, ViewDefinition};
pub use notification::{Notification, NotificationLevel};
pub use ports::CommandRunnerPort;
pub use task::{Precheck, Step, Task, TaskId};
pub use view::ViewKey;
