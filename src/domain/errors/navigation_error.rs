//! View registry and navigation error types.

use thiserror::Error;

use crate::domain::ViewKey;
use crate::domain::task::TaskId;

/// Errors raised while wiring or using the view registry.
///
/// None of these are user-recoverable. They describe a menu table that
/// references something that does not exist, or code asking for a view that
/// was never registered.
#[derive(Debug, Error, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum NavigationError {
    #[error("no view registered for `{0}`")]
    Unregistered(ViewKey),

    #[error("view `{0}` registered more than once")]
    DuplicateView(ViewKey),

    #[error("item `{label}` in {location} navigates to unregistered view `{target}`")]
    DanglingTarget {
        location: String,
        label: String,
        target: ViewKey,
    },

    #[error("item `{label}` in {location} runs unknown task `{task}`")]
    UnknownTask {
        location: String,
        label: String,
        task: TaskId,
    },
}
