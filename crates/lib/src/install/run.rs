//! Plan execution.

use tracing::{info, warn};

use crate::install::types::{InstallPlan, InstallReport, StepOutcome};
use crate::runner::CommandRunner;

/// Run every step of a plan and aggregate the outcomes.
///
/// Steps are sequential and a failure never aborts the run: later packages
/// may still install fine, and the report enumerates exactly which ones did
/// not. The final verdict belongs to [`InstallReport::summary`], not to the
/// last command's exit code.
pub async fn run_plan<R: CommandRunner>(plan: &InstallPlan, runner: &mut R) -> InstallReport {
  let mut outcomes = Vec::with_capacity(plan.steps.len());

  for step in &plan.steps {
    info!(step = %step.name, "running install step");
    let status = runner.run(&step.command).await;
    if !status.is_success() {
      warn!(step = %step.name, ?status, "install step failed");
    }
    outcomes.push(StepOutcome {
      step: step.clone(),
      status,
    });
  }

  InstallReport {
    outcomes,
    notes: plan.notes.clone(),
  }
}
