//! Automation tasks bound to menu buttons.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::CommandResult;
use crate::domain::ports::CommandRunnerPort;

/// Identifier of a task in the task table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Creates a task identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single interpreter invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Ad hoc command text, passed through unmodified.
    Command(String),
    /// Script file executed under a bypassed execution policy.
    Script(PathBuf),
}

impl Step {
    /// Creates a command step.
    #[must_use]
    pub fn command(text: impl Into<String>) -> Self {
        Self::Command(text.into())
    }

    /// Runs this step through the given runner.
    pub fn run_with(&self, runner: &dyn CommandRunnerPort) -> CommandResult {
        match self {
            Self::Command(text) => runner.run_command(text),
            Self::Script(path) => runner.run_script(path),
        }
    }

    /// Short human readable description.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Command(text) => text.clone(),
            Self::Script(path) => format!("script {}", path.display()),
        }
    }
}

/// Prerequisite gate run before a task's steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Precheck {
    /// Command whose success means the prerequisite is present.
    pub check: String,
    /// Command installing the prerequisite.
    pub install: String,
    /// Question shown before installing.
    pub prompt: String,
}

impl Precheck {
    /// NuGet package provider gate used by module installs.
    #[must_use]
    pub fn nuget() -> Self {
        Self {
            check: "Get-PackageProvider -Name NuGet".to_string(),
            install: "Install-PackageProvider -Name NuGet -MinimumVersion 2.8.5.201 -Force -Scope CurrentUser"
                .to_string(),
            prompt: "NuGet is not installed. Install it now?".to_string(),
        }
    }
}

/// An automation action triggered from the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Label shown in notifications and the activity log.
    pub label: String,
    /// Steps run in order.
    pub steps: Vec<Step>,
    /// Optional prerequisite gate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precheck: Option<Precheck>,
}

impl Task {
    /// Creates a task without a prerequisite gate.
    #[must_use]
    pub fn new(label: impl Into<String>, steps: Vec<Step>) -> Self {
        Self {
            label: label.into(),
            steps,
            precheck: None,
        }
    }

    /// Attaches a prerequisite gate.
    #[must_use]
    pub fn with_precheck(mut self, precheck: Precheck) -> Self {
        self.precheck = Some(precheck);
        self
    }
}

/// Built-in task table.
#[must_use]
pub fn default_tasks() -> BTreeMap<TaskId, Task> {
    let mut tasks = BTreeMap::new();

    tasks.insert(
        TaskId::new("install_exchange_online"),
        Task::new(
            "Install Exchange Online Module",
            vec![Step::command(
                "Install-Module -Name ExchangeOnline -Force -Scope CurrentUser",
            )],
        )
        .with_precheck(Precheck::nuget()),
    );
    tasks.insert(
        TaskId::new("install_graph"),
        Task::new(
            "Install Graph Module",
            vec![Step::command(
                "Install-Module -Name Microsoft.Graph -Force -Confirm:$False -Scope CurrentUser",
            )],
        )
        .with_precheck(Precheck::nuget()),
    );
    tasks.insert(
        TaskId::new("connect_exchange_online"),
        Task::new(
            "Connect to Exchange Online",
            vec![
                Step::command("Import-Module ExchangeOnlineManagement"),
                Step::command("Connect-ExchangeOnline"),
            ],
        ),
    );
    tasks.insert(
        TaskId::new("connect_graph"),
        Task::new(
            "Connect to Microsoft Graph",
            vec![Step::command(
                "Connect-MgGraph -Scopes 'User.Read.All, Directory.Read.All'",
            )],
        ),
    );

    tasks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_installs_are_gated_on_nuget() {
        let tasks = default_tasks();
        for id in ["install_exchange_online", "install_graph"] {
            let task = &tasks[&TaskId::new(id)];
            assert_eq!(task.precheck, Some(Precheck::nuget()));
        }
        assert!(tasks[&TaskId::new("connect_graph")].precheck.is_none());
    }

    #[test]
    fn test_step_description() {
        assert_eq!(Step::command("Get-Date").describe(), "Get-Date");
        assert_eq!(
            Step::Script(PathBuf::from("setup.ps1")).describe(),
            "script setup.ps1"
        );
    }
}
