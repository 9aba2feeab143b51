//! Implementation of the `codeckit plan` command.
//!
//! Computes the install command sequence without executing anything, either
//! for the detected host or for an explicitly supplied OS identifier.

use std::path::Path;

use anyhow::{Result, bail};

use codeckit_lib::consts;
use codeckit_lib::install::{InstallError, compute_plan};
use codeckit_lib::platform::{classify, detect};

use crate::output::{self, OutputFormat};

pub fn cmd_plan(dir: &Path, os_type: Option<&str>, format: OutputFormat) -> Result<()> {
  let support = match os_type {
    Some(os_type) => classify(os_type),
    None => detect(),
  };
  let venv_present = dir.join(consts::VENV_DIR).is_dir();

  let plan = match compute_plan(&support, venv_present) {
    Ok(plan) => plan,
    Err(err @ InstallError::UnsupportedPlatform { .. }) => {
      output::print_error(&err.to_string());
      bail!("no install plan for this platform");
    }
    Err(err) => return Err(err.into()),
  };

  if format.is_json() {
    return output::print_json(&plan);
  }

  println!("Install plan for {} ({} step(s))", plan.os, plan.steps.len());
  for step in &plan.steps {
    println!("  {}", step.command);
  }
  for note in &plan.notes {
    output::print_warning(note);
  }

  Ok(())
}
