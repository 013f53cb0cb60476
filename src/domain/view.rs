//! View identifiers.

use serde::{Deserialize, Serialize};

/// Identifier of a navigable menu screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKey {
    /// Landing view shown at startup.
    MainMenu,
    /// Package provider and module installation.
    InstallModules,
    /// Active Directory actions.
    ActiveDirectory,
    /// Exchange Online actions.
    ExchangeOnline,
    /// Microsoft Graph actions.
    Graph,
}

impl ViewKey {
    /// Every key, in sidebar order.
    pub const ALL: [Self; 5] = [
        Self::MainMenu,
        Self::InstallModules,
        Self::ActiveDirectory,
        Self::ExchangeOnline,
        Self::Graph,
    ];

    /// Returns the identifier used in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MainMenu => "main_menu",
            Self::InstallModules => "install_modules",
            Self::ActiveDirectory => "active_directory",
            Self::ExchangeOnline => "exchange_online",
            Self::Graph => "graph",
        }
    }
}

impl std::fmt::Display for ViewKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
