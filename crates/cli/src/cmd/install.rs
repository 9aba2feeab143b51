//! Implementation of the `codeckit install` command.
//!
//! Detects the host platform, computes the install plan, and executes it.
//! Every step's outcome is reported individually; the success message is
//! printed only when every step actually succeeded, and the process exits
//! non-zero otherwise.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::info;

use codeckit_lib::consts;
use codeckit_lib::install::{InstallError, compute_plan, run_plan};
use codeckit_lib::platform;
use codeckit_lib::runner::{RunStatus, ShellRunner, TraceRunner};

use crate::output;

pub fn cmd_install(dir: &Path, dry_run: bool, shell: Option<&str>) -> Result<()> {
  let support = platform::detect();
  let venv_present = dir.join(consts::VENV_DIR).is_dir();

  let plan = match compute_plan(&support, venv_present) {
    Ok(plan) => plan,
    Err(err @ InstallError::UnsupportedPlatform { .. }) => {
      output::print_error(&err.to_string());
      bail!("cannot install on this platform");
    }
    Err(err) => return Err(err.into()),
  };

  info!(os = %plan.os, steps = plan.steps.len(), venv = venv_present, "computed install plan");

  output::print_info(&format!(
    "Installing dependencies for {} ({} step(s))",
    plan.os,
    plan.steps.len()
  ));
  if venv_present {
    output::print_info(&format!("Using isolated environment: {}/", consts::VENV_DIR));
  }

  let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;

  if dry_run {
    let mut runner = TraceRunner::new();
    rt.block_on(run_plan(&plan, &mut runner));
    for command in runner.commands() {
      println!("  would run: {}", command);
    }
    for note in &plan.notes {
      output::print_warning(note);
    }
    return Ok(());
  }

  let mut runner = match shell {
    Some(shell) => ShellRunner::with_shell(shell),
    None => ShellRunner::new(),
  };
  let report = rt.block_on(run_plan(&plan, &mut runner));

  println!();
  for outcome in &report.outcomes {
    match &outcome.status {
      RunStatus::Success => output::print_success(&outcome.step.name),
      RunStatus::Failed { code, message } => {
        let detail = match (code, message) {
          (Some(code), _) => format!("exit code {}", code),
          (None, Some(message)) => message.clone(),
          (None, None) => "unknown failure".to_string(),
        };
        output::print_error(&format!("{} ({})", outcome.step.name, detail));
      }
    }
  }
  for note in &report.notes {
    output::print_warning(note);
  }

  println!();
  if report.is_success() {
    output::print_success(&report.summary());
    output::print_info(&report.audio_check_hint());
    Ok(())
  } else {
    for outcome in report.failures() {
      output::print_error(&format!("failed: {}", outcome.step.command));
    }
    bail!(report.summary());
  }
}
