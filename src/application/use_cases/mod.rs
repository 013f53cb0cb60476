//! Use case implementations.

mod precheck_use_case;
mod run_task_use_case;

pub use precheck_use_case::{PrecheckOutcome, PrecheckRun, PrecheckUseCase};
pub use run_task_use_case::{RunTaskUseCase, StepReport, TaskReport};
