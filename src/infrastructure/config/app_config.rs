//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::args::CliArgs;
use crate::domain::MenuTable;

pub(crate) const APP_NAME: &str = "admin-toolbox";
pub(crate) const APP_QUALIFIER: &str = "com";
pub(crate) const APP_ORGANIZATION: &str = "admintoolbox";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl LogLevel {
    /// Directive understood by `EnvFilter`.
    #[must_use]
    pub const fn as_directive(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_directive())
    }
}

/// How the external interpreter is invoked.
///
/// Commands run as `<program> <command_args..> <text>` and scripts as
/// `<program> <script_args..> <path>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpreterConfig {
    /// Executable name or path.
    #[serde(default = "default_program")]
    pub program: String,

    /// Arguments placed before ad hoc command text.
    #[serde(default = "default_command_args")]
    pub command_args: Vec<String>,

    /// Arguments placed before a script path.
    #[serde(default = "default_script_args")]
    pub script_args: Vec<String>,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            command_args: default_command_args(),
            script_args: default_script_args(),
        }
    }
}

fn default_program() -> String {
    "powershell".to_string()
}

fn default_command_args() -> Vec<String> {
    vec!["-Command".to_string()]
}

fn default_script_args() -> Vec<String> {
    ["-ExecutionPolicy", "Bypass", "-File"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// UI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Notification duration in seconds.
    #[serde(default = "default_notification_duration")]
    pub notification_duration: u64,

    /// Number of task outcomes kept in the activity pane.
    #[serde(default = "default_activity_log_size")]
    pub activity_log_size: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notification_duration: default_notification_duration(),
            activity_log_size: default_activity_log_size(),
        }
    }
}

fn default_notification_duration() -> u64 {
    5
}

fn default_activity_log_size() -> usize {
    50
}

/// Application configuration, loaded from TOML and overridden by CLI flags.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Interpreter invocation.
    #[serde(default)]
    pub interpreter: InterpreterConfig,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Menus, views, and tasks.
    #[serde(default)]
    pub menu: MenuTable,
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(program) = args.interpreter {
            self.interpreter.program = program;
        }
        if let Some(duration) = args.notification_duration {
            self.ui.notification_duration = duration;
        }
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("toolbox.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}
