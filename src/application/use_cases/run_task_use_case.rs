//! Task execution use case.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::ports::CommandRunnerPort;
use crate::domain::{CommandResult, Step, Task, TaskId};

/// Outcome of one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// Human readable step description.
    pub step: String,
    /// Runner result.
    pub result: CommandResult,
}

/// Outcome of a whole task run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskReport {
    /// Task that ran.
    pub task: TaskId,
    /// Task label.
    pub label: String,
    /// Prerequisite install, when the precheck failed and the user agreed.
    pub prerequisite: Option<StepReport>,
    /// One report per step, in run order.
    pub steps: Vec<StepReport>,
}

impl TaskReport {
    /// Whether every step succeeded.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.steps.iter().all(|step| step.result.succeeded)
    }

    /// Failed steps, including a failed prerequisite install.
    pub fn failures(&self) -> impl Iterator<Item = &StepReport> {
        self.prerequisite
            .iter()
            .chain(self.steps.iter())
            .filter(|step| !step.result.succeeded)
    }
}

/// Runs every step of a task through the command runner.
#[derive(Clone)]
pub struct RunTaskUseCase {
    runner: Arc<dyn CommandRunnerPort>,
}

impl RunTaskUseCase {
    #[must_use]
    pub const fn new(runner: Arc<dyn CommandRunnerPort>) -> Self {
        Self { runner }
    }

    /// Runs one step and logs its outcome.
    #[must_use]
    pub fn run_step(&self, step: &Step) -> StepReport {
        let description = step.describe();
        debug!(step = %description, "Running step");
        let result = step.run_with(self.runner.as_ref());
        if result.succeeded {
            info!(step = %description, "Step succeeded");
        } else {
            warn!(
                step = %description,
                exit_code = ?result.exit_code,
                error = result.error_summary().unwrap_or_default(),
                "Step failed"
            );
        }
        StepReport {
            step: description,
            result,
        }
    }

    /// Runs all steps in order. A failed step does not stop later ones.
    #[must_use]
    pub fn execute(&self, id: &TaskId, task: &Task) -> TaskReport {
        info!(task = %id, steps = task.steps.len(), "Running task");
        let steps = task.steps.iter().map(|step| self.run_step(step)).collect();
        TaskReport {
            task: id.clone(),
            label: task.label.clone(),
            prerequisite: None,
            steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockCommandRunnerPort;
    use mockall::Sequence;
    use std::path::{Path, PathBuf};

    #[test]
    fn test_runs_all_steps_even_after_failure() {
        let mut runner = MockCommandRunnerPort::new();
        let mut seq = Sequence::new();
        runner
            .expect_run_command()
            .withf(|cmd| cmd == "Import-Module ExchangeOnlineManagement")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| CommandResult::failure(Some(1), "module not found"));
        runner
            .expect_run_command()
            .withf(|cmd| cmd == "Connect-ExchangeOnline")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| CommandResult::success());

        let use_case = RunTaskUseCase::new(Arc::new(runner));
        let task = Task::new(
            "Connect",
            vec![
                Step::command("Import-Module ExchangeOnlineManagement"),
                Step::command("Connect-ExchangeOnline"),
            ],
        );
        let report = use_case.execute(&TaskId::new("connect"), &task);

        assert!(!report.succeeded());
        assert_eq!(report.steps.len(), 2);
        let failed: Vec<_> = report.failures().map(|s| s.step.as_str()).collect();
        assert_eq!(failed, ["Import-Module ExchangeOnlineManagement"]);
    }

    #[test]
    fn test_script_step_uses_run_script() {
        let mut runner = MockCommandRunnerPort::new();
        runner
            .expect_run_script()
            .withf(|path: &Path| path == Path::new("setup.ps1"))
            .times(1)
            .returning(|_| CommandResult::success());

        let use_case = RunTaskUseCase::new(Arc::new(runner));
        let task = Task::new("Setup", vec![Step::Script(PathBuf::from("setup.ps1"))]);
        let report = use_case.execute(&TaskId::new("setup"), &task);

        assert!(report.succeeded());
        assert_eq!(report.label, "Setup");
    }
}
