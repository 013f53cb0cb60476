//! Application layer with navigation services and use cases.

/// Navigation, notification, and activity services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use services::{ActivityLog, NotificationManager, ViewRegistry, ViewRouter};
pub use use_cases::{PrecheckUseCase, RunTaskUseCase, TaskReport};
