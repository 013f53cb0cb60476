//! Switches the content panel between views.

use std::sync::Arc;

use tracing::{debug, error};

use super::content_container::ContentContainer;
use super::view_registry::ViewRegistry;
use crate::domain::{NavigationError, ViewKey};

/// Holds the active view and rebuilds the content panel on navigation.
pub struct ViewRouter {
    registry: Arc<ViewRegistry>,
    container: ContentContainer,
}

impl ViewRouter {
    #[must_use]
    pub fn new(registry: Arc<ViewRegistry>) -> Self {
        Self {
            registry,
            container: ContentContainer::new(),
        }
    }

    /// Tears down the current view and mounts `key`'s content.
    ///
    /// Any key can follow any other; navigating to the active key rebuilds it
    /// in place.
    ///
    /// # Errors
    /// Returns [`NavigationError::Unregistered`] if `key` has no builder. The
    /// container is left untouched in that case.
    pub fn navigate(&mut self, key: ViewKey) -> Result<(), NavigationError> {
        if !self.registry.contains(key) {
            error!(view = %key, "Navigation to unregistered view");
            return Err(NavigationError::Unregistered(key));
        }

        let previous = self.container.clear();
        let content = self.registry.build(key)?;
        debug!(from = ?previous, to = %key, items = content.items.len(), "Navigating");
        self.container.mount(key, content);
        Ok(())
    }

    /// Key of the active view.
    #[must_use]
    pub fn current(&self) -> Option<ViewKey> {
        self.container.key()
    }

    #[must_use]
    pub fn container(&self) -> &ContentContainer {
        &self.container
    }
}
