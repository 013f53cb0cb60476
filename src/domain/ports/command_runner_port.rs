//! Command runner port definition.

use std::path::Path;

use crate::domain::CommandResult;

/// Port for invoking the external command interpreter.
///
/// Calls block until the interpreter exits. Failures are reported through the
/// returned [`CommandResult`], never as a panic or error.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunnerPort: Send + Sync {
    /// Runs ad hoc command text.
    fn run_command(&self, command: &str) -> CommandResult;

    /// Runs a script file.
    fn run_script(&self, script: &Path) -> CommandResult;
}
