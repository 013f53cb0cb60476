use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::application::use_cases::{
    PrecheckOutcome, PrecheckRun, PrecheckUseCase, RunTaskUseCase, StepReport, TaskReport,
};
use crate::domain::ports::CommandRunnerPort;
use crate::domain::{CommandResult, Task, TaskId};

#[derive(Debug)]
pub enum Action {
    /// The prerequisite check failed; the user has to answer `prompt`.
    ConfirmationRequired {
        id: TaskId,
        task: Task,
        prompt: String,
        check: CommandResult,
    },
    TaskFinished(TaskReport),
    TaskDeclined(TaskId),
    TaskAborted {
        id: TaskId,
        error: String,
    },
}

#[derive(Debug)]
pub enum BackendCommand {
    StartTask {
        id: TaskId,
        task: Task,
    },
    ResumeTask {
        id: TaskId,
        task: Task,
        confirmed: bool,
    },
}

/// Runs tasks off the UI thread, one command at a time.
pub struct Backend {
    run_task: RunTaskUseCase,
    precheck: PrecheckUseCase,
    command_rx: mpsc::UnboundedReceiver<BackendCommand>,
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Backend {
    pub fn new(
        runner: Arc<dyn CommandRunnerPort>,
        command_rx: mpsc::UnboundedReceiver<BackendCommand>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> Self {
        Self {
            run_task: RunTaskUseCase::new(Arc::clone(&runner)),
            precheck: PrecheckUseCase::new(runner),
            command_rx,
            action_tx,
        }
    }

    pub async fn run(mut self) {
        info!("Backend worker started");
        while let Some(command) = self.command_rx.recv().await {
            self.handle_command(command).await;
        }
        info!("Backend worker stopped");
    }

    async fn handle_command(&self, command: BackendCommand) {
        let id = match &command {
            BackendCommand::StartTask { id, .. } | BackendCommand::ResumeTask { id, .. } => {
                id.clone()
            }
        };
        let run_task = self.run_task.clone();
        let precheck = self.precheck.clone();

        let action = match tokio::task::spawn_blocking(move || {
            Self::execute(&run_task, &precheck, command)
        })
        .await
        {
            Ok(action) => action,
            Err(e) => {
                error!(task = %id, error = %e, "Task worker panicked");
                Action::TaskAborted {
                    id,
                    error: e.to_string(),
                }
            }
        };

        let _ = self.action_tx.send(action);
    }

    fn execute(
        run_task: &RunTaskUseCase,
        precheck: &PrecheckUseCase,
        command: BackendCommand,
    ) -> Action {
        match command {
            BackendCommand::StartTask { id, task } => {
                if let Some(gate) = &task.precheck
                    && let PrecheckOutcome::Missing { prompt, check } = precheck.check(gate)
                {
                    debug!(task = %id, "Waiting for prerequisite confirmation");
                    return Action::ConfirmationRequired {
                        id,
                        task,
                        prompt,
                        check,
                    };
                }
                Action::TaskFinished(run_task.execute(&id, &task))
            }
            BackendCommand::ResumeTask {
                id,
                task,
                confirmed,
            } => {
                let Some(gate) = task.precheck.clone() else {
                    return Action::TaskFinished(run_task.execute(&id, &task));
                };
                match precheck.resume(&gate, confirmed, || run_task.execute(&id, &task)) {
                    PrecheckRun::Completed {
                        prerequisite,
                        output: mut report,
                    } => {
                        report.prerequisite = prerequisite.map(|result| StepReport {
                            step: gate.install.clone(),
                            result,
                        });
                        Action::TaskFinished(report)
                    }
                    PrecheckRun::Declined => Action::TaskDeclined(id),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::task::default_tasks;
    use crate::domain::ports::mocks::MockCommandRunnerPort;
    use mockall::Sequence;

    const CHECK: &str = "Get-PackageProvider -Name NuGet";
    const INSTALL_NUGET: &str =
        "Install-PackageProvider -Name NuGet -MinimumVersion 2.8.5.201 -Force -Scope CurrentUser";
    const INSTALL_GRAPH: &str =
        "Install-Module -Name Microsoft.Graph -Force -Confirm:$False -Scope CurrentUser";

    fn spawn_backend(
        runner: MockCommandRunnerPort,
    ) -> (
        mpsc::UnboundedSender<BackendCommand>,
        mpsc::UnboundedReceiver<Action>,
    ) {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        tokio::spawn(Backend::new(Arc::new(runner), command_rx, action_tx).run());
        (command_tx, action_rx)
    }

    fn install_graph() -> (TaskId, Task) {
        let id = TaskId::new("install_graph");
        let task = default_tasks().remove(&id).unwrap();
        (id, task)
    }

    #[tokio::test]
    async fn test_missing_prerequisite_asks_before_running() {
        let mut runner = MockCommandRunnerPort::new();
        runner
            .expect_run_command()
            .withf(|cmd| cmd == CHECK)
            .times(1)
            .returning(|_| CommandResult::failure(Some(1), "not found"));

        let (command_tx, mut action_rx) = spawn_backend(runner);
        let (id, task) = install_graph();
        command_tx.send(BackendCommand::StartTask { id, task }).unwrap();

        match action_rx.recv().await.unwrap() {
            Action::ConfirmationRequired { prompt, check, .. } => {
                assert_eq!(prompt, "NuGet is not installed. Install it now?");
                assert!(!check.succeeded);
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_confirmed_resume_installs_then_runs() {
        let mut seq = Sequence::new();
        let mut runner = MockCommandRunnerPort::new();
        runner
            .expect_run_command()
            .withf(|cmd| cmd == INSTALL_NUGET)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| CommandResult::success());
        runner
            .expect_run_command()
            .withf(|cmd| cmd == INSTALL_GRAPH)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| CommandResult::success());

        let (command_tx, mut action_rx) = spawn_backend(runner);
        let (id, task) = install_graph();
        command_tx
            .send(BackendCommand::ResumeTask {
                id,
                task,
                confirmed: true,
            })
            .unwrap();

        match action_rx.recv().await.unwrap() {
            Action::TaskFinished(report) => {
                assert!(report.succeeded());
                let prerequisite = report.prerequisite.unwrap();
                assert_eq!(prerequisite.step, INSTALL_NUGET);
                assert_eq!(report.steps.len(), 1);
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_declined_resume_runs_nothing() {
        let runner = MockCommandRunnerPort::new();
        let (command_tx, mut action_rx) = spawn_backend(runner);
        let (id, task) = install_graph();
        command_tx
            .send(BackendCommand::ResumeTask {
                id: id.clone(),
                task,
                confirmed: false,
            })
            .unwrap();

        match action_rx.recv().await.unwrap() {
            Action::TaskDeclined(declined) => assert_eq!(declined, id),
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_ungated_task_runs_directly() {
        let mut runner = MockCommandRunnerPort::new();
        runner
            .expect_run_command()
            .times(2)
            .returning(|_| CommandResult::success());

        let (command_tx, mut action_rx) = spawn_backend(runner);
        let id = TaskId::new("connect_exchange_online");
        let task = default_tasks().remove(&id).unwrap();
        command_tx.send(BackendCommand::StartTask { id, task }).unwrap();

        match action_rx.recv().await.unwrap() {
            Action::TaskFinished(report) => {
                assert!(report.prerequisite.is_none());
                assert_eq!(report.steps.len(), 2);
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }
}
