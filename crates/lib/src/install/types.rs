//! Types for install planning and outcome reporting.

use serde::Serialize;
use thiserror::Error;

use crate::consts;
use crate::platform::Os;
use crate::runner::RunStatus;

/// Errors that can occur while planning an install.
#[derive(Debug, Error)]
pub enum InstallError {
  /// The host platform matched none of the known branches.
  ///
  /// The historical behavior was a silent no-op; the operator ended up with
  /// no codec support and no warning. Callers must handle this instead.
  #[error("unsupported platform: {os_type} (install ffmpeg and libsndfile manually)")]
  UnsupportedPlatform { os_type: String },

  /// I/O error while inspecting the project directory.
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}

/// What a step does, for reporting and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
  /// Activate the isolated Python environment.
  Activate,
  /// Refresh the system package index.
  IndexRefresh,
  /// Install the audio-manipulation library.
  AudioLib,
  /// Install a native codec package.
  Native,
}

/// One command the installer issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallStep {
  /// Short name shown in the step checklist (usually the package).
  pub name: String,
  /// The shell command issued for this step.
  pub command: String,
  pub kind: StepKind,
}

impl InstallStep {
  pub fn new(name: impl Into<String>, command: impl Into<String>, kind: StepKind) -> Self {
    Self {
      name: name.into(),
      command: command.into(),
      kind,
    }
  }
}

/// The ordered command sequence for one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallPlan {
  pub os: Os,
  pub steps: Vec<InstallStep>,
  /// Manual actions the installer does not automate (e.g. ffmpeg on Windows).
  pub notes: Vec<String>,
}

/// Outcome of one executed step.
#[derive(Debug, Clone, Serialize)]
pub struct StepOutcome {
  pub step: InstallStep,
  pub status: RunStatus,
}

/// Aggregated result of running a plan.
///
/// Every step is always attempted; a failing native install no longer hides
/// behind an unconditional success message.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InstallReport {
  pub outcomes: Vec<StepOutcome>,
  pub notes: Vec<String>,
}

impl InstallReport {
  /// Returns true if every step succeeded.
  pub fn is_success(&self) -> bool {
    self.outcomes.iter().all(|o| o.status.is_success())
  }

  /// The steps that failed, in plan order.
  pub fn failures(&self) -> impl Iterator<Item = &StepOutcome> {
    self.outcomes.iter().filter(|o| !o.status.is_success())
  }

  pub fn failure_count(&self) -> usize {
    self.failures().count()
  }

  /// One-line status for the operator.
  ///
  /// The historical success line survives, but only when it is true.
  pub fn summary(&self) -> String {
    if self.is_success() {
      "Dependencies installed successfully!".to_string()
    } else {
      format!("{} install step(s) failed", self.failure_count())
    }
  }

  /// Usage hint for the companion audio-loading check utility.
  pub fn audio_check_hint(&self) -> String {
    format!("Verify audio loading with: {}", consts::AUDIO_CHECK_HINT)
  }
}
