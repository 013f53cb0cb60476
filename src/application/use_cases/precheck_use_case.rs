//! Prerequisite gate in front of install tasks.
//!
//! The check runs first; if it fails the user is asked whether to install the
//! prerequisite. Declining abandons the action without running anything else.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::ports::CommandRunnerPort;
use crate::domain::{CommandResult, Precheck};

/// Result of running the check command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrecheckOutcome {
    /// Prerequisite present, the primary action may run.
    Satisfied,
    /// Prerequisite missing; ask the user before installing.
    Missing {
        /// Question to show.
        prompt: String,
        /// Result of the failed check.
        check: CommandResult,
    },
}

/// Result of a gated run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrecheckRun<R> {
    /// The primary action ran.
    Completed {
        /// Prerequisite install result, if one was needed.
        prerequisite: Option<CommandResult>,
        /// Primary action output.
        output: R,
    },
    /// The user declined the prerequisite install.
    Declined,
}

#[derive(Clone)]
pub struct PrecheckUseCase {
    runner: Arc<dyn CommandRunnerPort>,
}

impl PrecheckUseCase {
    #[must_use]
    pub const fn new(runner: Arc<dyn CommandRunnerPort>) -> Self {
        Self { runner }
    }

    /// Runs the check command.
    #[must_use]
    pub fn check(&self, precheck: &Precheck) -> PrecheckOutcome {
        debug!(check = %precheck.check, "Running prerequisite check");
        let check = self.runner.run_command(&precheck.check);
        if check.succeeded {
            PrecheckOutcome::Satisfied
        } else {
            info!(check = %precheck.check, "Prerequisite missing");
            PrecheckOutcome::Missing {
                prompt: precheck.prompt.clone(),
                check,
            }
        }
    }

    /// Runs the prerequisite install command.
    #[must_use]
    pub fn install(&self, precheck: &Precheck) -> CommandResult {
        info!(install = %precheck.install, "Installing prerequisite");
        let result = self.runner.run_command(&precheck.install);
        if !result.succeeded {
            warn!(
                error = result.error_summary().unwrap_or_default(),
                "Prerequisite install failed"
            );
        }
        result
    }

    /// Continues after the user answered the prompt.
    ///
    /// On yes the prerequisite is installed and `primary` runs regardless of
    /// the install result; on no nothing runs.
    pub fn resume<R>(
        &self,
        precheck: &Precheck,
        confirmed: bool,
        primary: impl FnOnce() -> R,
    ) -> PrecheckRun<R> {
        if !confirmed {
            info!("Prerequisite install declined");
            return PrecheckRun::Declined;
        }
        let prerequisite = self.install(precheck);
        PrecheckRun::Completed {
            prerequisite: Some(prerequisite),
            output: primary(),
        }
    }

    /// Check, ask through `confirm` if needed, then run `primary`.
    pub fn execute<R>(
        &self,
        precheck: &Precheck,
        confirm: impl FnOnce(&str) -> bool,
        primary: impl FnOnce() -> R,
    ) -> PrecheckRun<R> {
        match self.check(precheck) {
            PrecheckOutcome::Satisfied => PrecheckRun::Completed {
                prerequisite: None,
                output: primary(),
            },
            PrecheckOutcome::Missing { prompt, .. } => {
                let confirmed = confirm(&prompt);
                self.resume(precheck, confirmed, primary)
            }
        }
    }
}
