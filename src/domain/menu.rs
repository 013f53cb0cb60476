//! Menu table: the data every view is built from.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::ViewKey;
use crate::domain::task::{Task, TaskId, default_tasks};

/// What activating a menu item does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "target", rename_all = "snake_case")]
pub enum MenuAction {
    /// Switch the content panel to another view.
    Navigate(ViewKey),
    /// Run a task from the task table.
    Run(TaskId),
    /// Inert button, reserved for a future action.
    Placeholder,
    /// Leave the application.
    Quit,
}

/// A labelled button bound to an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Button text.
    pub label: String,
    /// Bound action.
    #[serde(flatten)]
    pub action: MenuAction,
}

impl MenuItem {
    /// Creates a menu item.
    #[must_use]
    pub fn new(label: impl Into<String>, action: MenuAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }

    fn navigate(label: &str, key: ViewKey) -> Self {
        Self::new(label, MenuAction::Navigate(key))
    }

    fn run(label: &str, task: &str) -> Self {
        Self::new(label, MenuAction::Run(TaskId::new(task)))
    }

    fn placeholder(label: &str) -> Self {
        Self::new(label, MenuAction::Placeholder)
    }

    fn back() -> Self {
        Self::navigate("Back to Main Menu", ViewKey::MainMenu)
    }
}

/// Static description of one view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewDefinition {
    /// View identifier.
    pub key: ViewKey,
    /// Heading shown above the items.
    pub title: String,
    /// Optional line under the heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Buttons, in display order.
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

impl ViewDefinition {
    fn new(key: ViewKey, title: &str, items: Vec<MenuItem>) -> Self {
        Self {
            key,
            title: title.to_string(),
            subtitle: None,
            items,
        }
    }
}

/// Content produced by a view builder and mounted in the content panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewContent {
    /// Heading.
    pub title: String,
    /// Optional line under the heading.
    pub subtitle: Option<String>,
    /// Buttons, in display order.
    pub items: Vec<MenuItem>,
}

impl From<&ViewDefinition> for ViewContent {
    fn from(definition: &ViewDefinition) -> Self {
        Self {
            title: definition.title.clone(),
            subtitle: definition.subtitle.clone(),
            items: definition.items.clone(),
        }
    }
}

/// Full navigation and action table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuTable {
    /// Main menu buttons shown in the sidebar.
    #[serde(default = "default_sidebar")]
    pub sidebar: Vec<MenuItem>,
    /// One definition per view.
    #[serde(default = "default_views")]
    pub views: Vec<ViewDefinition>,
    /// Tasks referenced by `run` items.
    #[serde(default = "default_tasks")]
    pub tasks: BTreeMap<TaskId, Task>,
}

impl MenuTable {
    /// Looks up a task by id.
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// Iterates every item of the sidebar and all views, tagged with where it
    /// lives.
    pub fn all_items(&self) -> impl Iterator<Item = (&str, &MenuItem)> {
        self.sidebar.iter().map(|item| ("sidebar", item)).chain(
            self.views
                .iter()
                .flat_map(|view| view.items.iter().map(move |item| (view.key.as_str(), item))),
        )
    }
}

impl Default for MenuTable {
    fn default() -> Self {
        Self {
            sidebar: default_sidebar(),
            views: default_views(),
            tasks: default_tasks(),
        }
    }
}

fn default_sidebar() -> Vec<MenuItem> {
    vec![
        MenuItem::navigate("Install Modules", ViewKey::InstallModules),
        MenuItem::navigate("Active Directory", ViewKey::ActiveDirectory),
        MenuItem::navigate("Exchange Online", ViewKey::ExchangeOnline),
        MenuItem::navigate("Graph", ViewKey::Graph),
        MenuItem::new("Exit", MenuAction::Quit),
    ]
}

fn default_views() -> Vec<ViewDefinition> {
    vec![
        ViewDefinition {
            subtitle: Some("Pick a menu on the left to get started.".to_string()),
            ..ViewDefinition::new(ViewKey::MainMenu, "Welcome to the Toolbox", Vec::new())
        },
        ViewDefinition::new(
            ViewKey::InstallModules,
            "Install Modules Menu",
            vec![
                MenuItem::run("Install Exchange Online Module", "install_exchange_online"),
                MenuItem::run("Install Graph Module", "install_graph"),
                MenuItem::back(),
            ],
        ),
        ViewDefinition::new(
            ViewKey::ActiveDirectory,
            "Active Directory Menu",
            vec![
                MenuItem::placeholder("Option 1"),
                MenuItem::placeholder("Option 2"),
                MenuItem::back(),
            ],
        ),
        ViewDefinition::new(
            ViewKey::ExchangeOnline,
            "Exchange Online Menu",
            vec![
                MenuItem::run("Connect to Exchange Online", "connect_exchange_online"),
                MenuItem::placeholder("Option 2"),
                MenuItem::back(),
            ],
        ),
        ViewDefinition::new(
            ViewKey::Graph,
            "Graph Menu",
            vec![
                MenuItem::run("Connect to Microsoft Graph", "connect_graph"),
                MenuItem::placeholder("Option 2"),
                MenuItem::back(),
            ],
        ),
    ]
}
