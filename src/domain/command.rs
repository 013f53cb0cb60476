//! Outcome of a single interpreter invocation.

/// Result of running one command or script through the interpreter.
///
/// Produced once per invocation and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the process exited with status 0.
    pub succeeded: bool,
    /// Captured standard error when the invocation failed.
    pub error_output: Option<String>,
    /// Exit code, absent when the process could not be spawned or was killed
    /// by a signal.
    pub exit_code: Option<i32>,
}

impl CommandResult {
    /// Creates a successful result.
    #[must_use]
    pub const fn success() -> Self {
        Self {
            succeeded: true,
            error_output: None,
            exit_code: Some(0),
        }
    }

    /// Creates a failed result from a finished process.
    ///
    /// An empty `stderr` is replaced by a line naming the exit status, so a
    /// failure always carries some text.
    #[must_use]
    pub fn failure(exit_code: Option<i32>, stderr: impl Into<String>) -> Self {
        let stderr = stderr.into();
        let error_output = if stderr.trim().is_empty() {
            match exit_code {
                Some(code) => format!("process exited with status {code}"),
                None => "process terminated without an exit status".to_string(),
            }
        } else {
            stderr
        };

        Self {
            succeeded: false,
            error_output: Some(error_output),
            exit_code,
        }
    }

    /// Creates a failed result for a process that never started.
    #[must_use]
    pub fn spawn_failure(message: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            error_output: Some(message.into()),
            exit_code: None,
        }
    }

    /// Returns the first non-empty line of the error output.
    #[must_use]
    pub fn error_summary(&self) -> Option<&str> {
        self.error_output
            .as_deref()
            .and_then(|text| text.lines().map(str::trim).find(|line| !line.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_keeps_stderr_verbatim() {
        let result = CommandResult::failure(Some(1), "boom\n");
        assert!(!result.succeeded);
        assert_eq!(result.error_output.as_deref(), Some("boom\n"));
        assert_eq!(result.exit_code, Some(1));
    }

    #[test]
    fn test_failure_without_stderr_names_status() {
        let result = CommandResult::failure(Some(7), "  \n");
        assert_eq!(
            result.error_output.as_deref(),
            Some("process exited with status 7")
        );
    }

    #[test]
    fn test_error_summary_skips_blank_lines() {
        let result = CommandResult::failure(Some(1), "\n  first problem \nsecond");
        assert_eq!(result.error_summary(), Some("first problem"));
        assert_eq!(CommandResult::success().error_summary(), None);
    }
}
