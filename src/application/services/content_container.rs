//! The single region holding the active view's content.

use crate::domain::{MenuItem, ViewContent, ViewKey};

/// Reference to an item of the content mounted at a given generation.
///
/// A handle issued before the container was remounted never resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemHandle {
    generation: u64,
    index: usize,
}

#[derive(Debug)]
struct Mounted {
    key: ViewKey,
    content: ViewContent,
}

/// Owns the content of at most one view at a time.
#[derive(Debug, Default)]
pub struct ContentContainer {
    mounted: Option<Mounted>,
    generation: u64,
}

impl ContentContainer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Destroys the current content, returning the key it belonged to.
    pub fn clear(&mut self) -> Option<ViewKey> {
        self.mounted.take().map(|mounted| mounted.key)
    }

    /// Replaces whatever is mounted with `content`.
    pub fn mount(&mut self, key: ViewKey, content: ViewContent) {
        self.clear();
        self.generation = self.generation.wrapping_add(1);
        self.mounted = Some(Mounted { key, content });
    }

    /// Key of the mounted view.
    #[must_use]
    pub fn key(&self) -> Option<ViewKey> {
        self.mounted.as_ref().map(|mounted| mounted.key)
    }

    /// Mounted content.
    #[must_use]
    pub fn content(&self) -> Option<&ViewContent> {
        self.mounted.as_ref().map(|mounted| &mounted.content)
    }

    /// Items of the mounted content, empty when nothing is mounted.
    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        self.content()
            .map(|content| content.items.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Number of mounts performed so far.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Issues a handle for the item at `index` of the current content.
    #[must_use]
    pub fn handle(&self, index: usize) -> Option<ItemHandle> {
        (index < self.len()).then_some(ItemHandle {
            generation: self.generation,
            index,
        })
    }

    /// Resolves a handle, failing for handles from earlier mounts.
    #[must_use]
    pub fn resolve(&self, handle: ItemHandle) -> Option<&MenuItem> {
        if handle.generation != self.generation {
            return None;
        }
        self.items().get(handle.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MenuAction;

    fn content(title: &str, labels: &[&str]) -> ViewContent {
        ViewContent {
            title: title.to_string(),
            subtitle: None,
            items: labels
                .iter()
                .map(|label| MenuItem::new(*label, MenuAction::Placeholder))
                .collect(),
        }
    }

    #[test]
    fn test_mount_replaces_previous_content() {
        let mut container = ContentContainer::new();
        container.mount(ViewKey::Graph, content("Graph", &["a", "b", "c"]));
        container.mount(ViewKey::MainMenu, content("Main", &["x"]));

        assert_eq!(container.key(), Some(ViewKey::MainMenu));
        assert_eq!(container.len(), 1);
        assert_eq!(container.items()[0].label, "x");
    }

    #[test]
    fn test_stale_handle_does_not_resolve() {
        let mut container = ContentContainer::new();
        container.mount(ViewKey::Graph, content("Graph", &["a", "b"]));
        let handle = container.handle(1).unwrap();
        assert_eq!(container.resolve(handle).unwrap().label, "b");

        container.mount(ViewKey::Graph, content("Graph", &["a", "b"]));
        assert!(container.resolve(handle).is_none());
        assert!(container.resolve(container.handle(1).unwrap()).is_some());
    }

    #[test]
    fn test_clear_and_out_of_range_handle() {
        let mut container = ContentContainer::new();
        assert!(container.handle(0).is_none());

        container.mount(ViewKey::Graph, content("Graph", &["a"]));
        assert!(container.handle(1).is_none());
        assert_eq!(container.clear(), Some(ViewKey::Graph));
        assert!(container.is_empty());
        assert!(container.content().is_none());
    }
}
