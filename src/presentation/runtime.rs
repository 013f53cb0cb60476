//! Async runtime lifecycle for the terminal app.
//!
//! Tasks run on the blocking pool and cannot be cancelled once the
//! interpreter is spawned, so the runtime is shut down with a deadline
//! instead of being dropped. A task still in flight at exit is abandoned.

use std::time::Duration;

use tokio::runtime::{Builder, Runtime};
use tracing::debug;

/// How long exit waits for an in-flight task before abandoning it.
pub const SHUTDOWN_GRACE: Duration = Duration::from_millis(250);

/// Builds the multi-threaded runtime the app and its backend run on.
///
/// # Errors
/// Returns an error if the runtime's worker threads cannot be started.
pub fn build() -> std::io::Result<Runtime> {
    Builder::new_multi_thread().enable_all().build()
}

/// Stops the runtime, waiting at most [`SHUTDOWN_GRACE`] for blocking work.
pub fn shutdown(runtime: Runtime) {
    debug!(grace = ?SHUTDOWN_GRACE, "Shutting down runtime");
    runtime.shutdown_timeout(SHUTDOWN_GRACE);
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Instant;
    use tokio::sync::mpsc;

    use crate::domain::{Step, Task, TaskId};
    use crate::infrastructure::PowerShellRunner;
    use crate::infrastructure::config::InterpreterConfig;
    use crate::presentation::ui::{Backend, BackendCommand};

    #[test]
    fn test_shutdown_does_not_wait_for_running_task() {
        let runtime = build().unwrap();
        let runner = PowerShellRunner::new(InterpreterConfig {
            program: "sh".to_string(),
            command_args: vec!["-c".to_string()],
            script_args: Vec::new(),
        });
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        runtime.spawn(Backend::new(Arc::new(runner), command_rx, action_tx).run());
        command_tx
            .send(BackendCommand::StartTask {
                id: TaskId::new("slow"),
                task: Task::new("Slow task", vec![Step::command("sleep 4")]),
            })
            .unwrap();
        runtime.block_on(async { tokio::time::sleep(Duration::from_millis(300)).await });

        let started = Instant::now();
        shutdown(runtime);
        let elapsed = started.elapsed();

        assert!(elapsed < Duration::from_secs(1), "shutdown took {elapsed:?}");
        drop((command_tx, action_rx));
    }
}
