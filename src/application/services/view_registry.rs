//! Immutable mapping from view keys to content builders.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::domain::{MenuAction, MenuTable, NavigationError, ViewContent, ViewKey};

/// Zero-argument procedure producing a view's content.
pub type ViewBuilder = Arc<dyn Fn() -> ViewContent + Send + Sync>;

/// Registry of view builders, built once at startup.
pub struct ViewRegistry {
    builders: HashMap<ViewKey, ViewBuilder>,
}

impl ViewRegistry {
    /// Starts an empty registry builder.
    #[must_use]
    pub fn builder() -> ViewRegistryBuilder {
        ViewRegistryBuilder {
            builders: HashMap::new(),
        }
    }

    /// Builds a registry from a menu table.
    ///
    /// # Errors
    /// Returns an error if a view is defined twice, or if any sidebar or view
    /// item navigates to an undefined view or runs an unknown task.
    pub fn from_table(table: &MenuTable) -> Result<Self, NavigationError> {
        let mut builder = Self::builder();
        for definition in &table.views {
            let content = ViewContent::from(definition);
            builder = builder.register(definition.key, move || content.clone())?;
        }

        for (location, item) in table.all_items() {
            match &item.action {
                MenuAction::Navigate(target) if !builder.builders.contains_key(target) => {
                    return Err(NavigationError::DanglingTarget {
                        location: location.to_string(),
                        label: item.label.clone(),
                        target: *target,
                    });
                }
                MenuAction::Run(task) if table.task(task).is_none() => {
                    return Err(NavigationError::UnknownTask {
                        location: location.to_string(),
                        label: item.label.clone(),
                        task: task.clone(),
                    });
                }
                _ => {}
            }
        }

        let registry = builder.build();
        debug!(views = registry.len(), "View registry built");
        Ok(registry)
    }

    /// Returns whether `key` has a builder.
    #[must_use]
    pub fn contains(&self, key: ViewKey) -> bool {
        self.builders.contains_key(&key)
    }

    /// Number of registered views.
    #[must_use]
    pub fn len(&self) -> usize {
        self.builders.len()
    }

    /// Returns whether no views are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    /// Invokes the builder registered for `key`.
    ///
    /// # Errors
    /// Returns [`NavigationError::Unregistered`] if `key` has no builder.
    pub fn build(&self, key: ViewKey) -> Result<ViewContent, NavigationError> {
        self.builders
            .get(&key)
            .map(|builder| builder())
            .ok_or(NavigationError::Unregistered(key))
    }
}

/// Accumulates builders before freezing them into a [`ViewRegistry`].
pub struct ViewRegistryBuilder {
    builders: HashMap<ViewKey, ViewBuilder>,
}

impl ViewRegistryBuilder {
    /// Registers the builder for `key`.
    ///
    /// # Errors
    /// Returns [`NavigationError::DuplicateView`] if `key` already has one.
    pub fn register<F>(mut self, key: ViewKey, builder: F) -> Result<Self, NavigationError>
    where
        F: Fn() -> ViewContent + Send + Sync + 'static,
    {
        if self.builders.contains_key(&key) {
            return Err(NavigationError::DuplicateView(key));
        }
        self.builders.insert(key, Arc::new(builder));
        Ok(self)
    }

    #[must_use]
    pub fn build(self) -> ViewRegistry {
        ViewRegistry {
            builders: self.builders,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MenuItem, ViewDefinition};

    #[test]
    fn test_default_table_registers_every_key() {
        let registry = ViewRegistry::from_table(&MenuTable::default()).unwrap();
        for key in ViewKey::ALL {
            assert!(registry.contains(key), "{key} missing");
        }
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let result = ViewRegistry::builder()
            .register(ViewKey::Graph, || ViewContent {
                title: "a".into(),
                subtitle: None,
                items: vec![],
            })
            .and_then(|b| {
                b.register(ViewKey::Graph, || ViewContent {
                    title: "b".into(),
                    subtitle: None,
                    items: vec![],
                })
            });
        assert!(matches!(result, Err(NavigationError::DuplicateView(ViewKey::Graph))));
    }

    #[test]
    fn test_dangling_navigation_target_rejected() {
        let mut table = MenuTable::default();
        table.views.retain(|v| v.key != ViewKey::Graph);

        let err = ViewRegistry::from_table(&table).err().unwrap();
        assert_eq!(
            err,
            NavigationError::DanglingTarget {
                location: "sidebar".into(),
                label: "Graph".into(),
                target: ViewKey::Graph,
            }
        );
    }

    #[test]
    fn test_view_defined_twice_in_table_rejected() {
        let mut table = MenuTable::default();
        table.views.push(ViewDefinition {
            key: ViewKey::MainMenu,
            title: "dup".into(),
            subtitle: None,
            items: vec![],
        });
        assert!(matches!(
            ViewRegistry::from_table(&table),
            Err(NavigationError::DuplicateView(ViewKey::MainMenu))
        ));
    }

    #[test]
    fn test_unknown_task_rejected() {
        let mut table = MenuTable::default();
        table.sidebar.push(MenuItem::new(
            "Broken",
            MenuAction::Run(crate::domain::TaskId::new("nope")),
        ));
        assert!(matches!(
            ViewRegistry::from_table(&table),
            Err(NavigationError::UnknownTask { .. })
        ));
    }

    #[test]
    fn test_build_unregistered_key() {
        let registry = ViewRegistry::builder().build();
        assert!(registry.is_empty());
        assert_eq!(
            registry.build(ViewKey::MainMenu),
            Err(NavigationError::Unregistered(ViewKey::MainMenu))
        );
    }
}
