pub mod activity_log;
pub mod content_container;
pub mod notification_manager;
pub mod view_registry;
pub mod view_router;

pub use activity_log::{ActivityEntry, ActivityLog};
pub use content_container::{ContentContainer, ItemHandle};
pub use notification_manager::NotificationManager;
pub use view_registry::{ViewBuilder, ViewRegistry, ViewRegistryBuilder};
pub use view_router::ViewRouter;
