//! Blocking interpreter adapter.
//!
//! Commands run as `<program> <command_args..> <text>` and scripts as
//! `<program> <script_args..> <path>`. Arguments are passed as a vector, never
//! through a shell, so command text reaches the interpreter unmodified.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, error, info, warn};

use crate::domain::CommandResult;
use crate::domain::ports::CommandRunnerPort;
use crate::infrastructure::config::InterpreterConfig;

/// Runs commands and scripts through a PowerShell-style interpreter.
///
/// Every call blocks until the child exits. Standard output and standard
/// error are both captured so nothing is written over the terminal UI.
#[derive(Debug, Clone)]
pub struct PowerShellRunner {
    interpreter: InterpreterConfig,
}

impl PowerShellRunner {
    #[must_use]
    pub const fn new(interpreter: InterpreterConfig) -> Self {
        Self { interpreter }
    }

    /// Looks the interpreter up on `PATH`.
    ///
    /// # Errors
    /// Returns an error if the program cannot be found.
    pub fn resolve_program(&self) -> Result<PathBuf, which::Error> {
        which::which(&self.interpreter.program)
    }

    fn build(&self, prefix: &[String], target: &OsStr) -> Command {
        let mut command = Command::new(&self.interpreter.program);
        command
            .args(prefix)
            .arg(target)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        command
    }

    fn execute(&self, mut command: Command, what: &str) -> CommandResult {
        debug!(program = %self.interpreter.program, invocation = what, "Spawning interpreter");

        let output = match command.output() {
            Ok(output) => output,
            Err(e) => {
                error!(program = %self.interpreter.program, error = %e, "Failed to spawn interpreter");
                return CommandResult::spawn_failure(format!(
                    "failed to start `{}`: {e}",
                    self.interpreter.program
                ));
            }
        };

        if output.status.success() {
            info!(invocation = what, "Script executed successfully");
            CommandResult::success()
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            warn!(
                invocation = what,
                exit_code = ?output.status.code(),
                stderr = %stderr.trim_end(),
                "Interpreter reported failure"
            );
            CommandResult::failure(output.status.code(), stderr)
        }
    }
}

impl CommandRunnerPort for PowerShellRunner {
    fn run_command(&self, command: &str) -> CommandResult {
        let process = self.build(&self.interpreter.command_args, OsStr::new(command));
        self.execute(process, command)
    }

    fn run_script(&self, script: &Path) -> CommandResult {
        let process = self.build(&self.interpreter.script_args, script.as_os_str());
        self.execute(process, &script.display().to_string())
    }
}
