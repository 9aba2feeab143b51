//! Install plan computation.
//!
//! Planning is pure: the same platform classification and virtualenv state
//! always produce the identical step sequence, so plans can be asserted
//! against recorded traces and re-running the installer is reproducible.

use crate::consts;
use crate::install::types::{InstallError, InstallPlan, InstallStep, StepKind};
use crate::platform::{Os, Support};

/// Compute the install plan for a classified platform.
///
/// `venv_present` says whether the isolated environment directory exists in
/// the project. When it does, activation is the first step and the
/// audio-library install is composed with it, so pip targets the virtualenv
/// rather than the system-wide installation. Each step runs in its own shell,
/// so the composition is explicit rather than relying on state carrying over
/// between steps.
///
/// Unrecognized platforms are an error the caller must surface, not a no-op.
pub fn compute_plan(support: &Support, venv_present: bool) -> Result<InstallPlan, InstallError> {
  let os = match support {
    Support::Supported { os } => *os,
    Support::Unsupported { os_type } => {
      return Err(InstallError::UnsupportedPlatform { os_type: os_type.clone() });
    }
  };

  let mut steps = Vec::new();
  let mut notes = Vec::new();

  let activate = activate_command(os);
  if venv_present {
    steps.push(InstallStep::new(consts::VENV_DIR, activate.clone(), StepKind::Activate));
  }

  let pip = format!("pip install {}", consts::AUDIO_LIB);
  let pip = if venv_present { format!("{activate} && {pip}") } else { pip };
  steps.push(InstallStep::new(consts::AUDIO_LIB, pip, StepKind::AudioLib));

  match os {
    Os::Darwin => {
      for pkg in consts::DARWIN_NATIVE_PACKAGES {
        steps.push(InstallStep::new(pkg, format!("brew install {pkg}"), StepKind::Native));
      }
    }
    Os::Linux => {
      steps.push(InstallStep::new(
        "apt-get update",
        "sudo apt-get update",
        StepKind::IndexRefresh,
      ));
      for pkg in consts::LINUX_NATIVE_PACKAGES {
        steps.push(InstallStep::new(
          pkg,
          format!("sudo apt-get install -y {pkg}"),
          StepKind::Native,
        ));
      }
    }
    Os::Windows => {
      notes.push(format!(
        "ffmpeg is not installed automatically on Windows; download a build from {} and add it to PATH",
        consts::FFMPEG_DOWNLOAD_URL
      ));
    }
  }

  Ok(InstallPlan { os, steps, notes })
}

fn activate_command(os: Os) -> String {
  // The Windows branch is reached from msys/cygwin shells, where the venv
  // layout is Scripts/ but the activate file is sourced with sh semantics
  // and forward slashes.
  match os {
    Os::Windows => format!(". {}/Scripts/activate", consts::VENV_DIR),
    Os::Darwin | Os::Linux => format!(". {}/bin/activate", consts::VENV_DIR),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::platform::classify;

  fn commands(plan: &InstallPlan) -> Vec<&str> {
    plan.steps.iter().map(|s| s.command.as_str()).collect()
  }

  #[test]
  fn darwin_plan_without_venv() {
    let plan = compute_plan(&classify("darwin19.0"), false).unwrap();
    assert_eq!(plan.os, Os::Darwin);
    assert_eq!(
      commands(&plan),
      vec!["pip install pydub", "brew install ffmpeg", "brew install libsndfile"]
    );
    assert!(plan.notes.is_empty());
  }

  #[test]
  fn linux_plan_refreshes_index_before_native_installs() {
    let plan = compute_plan(&classify("linux-gnu"), false).unwrap();
    assert_eq!(
      commands(&plan),
      vec![
        "pip install pydub",
        "sudo apt-get update",
        "sudo apt-get install -y ffmpeg",
        "sudo apt-get install -y libsndfile1",
      ]
    );
  }

  #[test]
  fn windows_plan_has_no_native_steps_but_a_manual_note() {
    let plan = compute_plan(&classify("msys"), false).unwrap();
    assert_eq!(commands(&plan), vec!["pip install pydub"]);
    assert_eq!(plan.notes.len(), 1);
    assert!(plan.notes[0].contains("ffmpeg.org"));
  }

  #[test]
  fn venv_activation_precedes_every_install_step() {
    let plan = compute_plan(&classify("darwin19.0"), true).unwrap();
    assert_eq!(plan.steps[0].kind, StepKind::Activate);
    assert_eq!(plan.steps[0].command, ". venv/bin/activate");
    // pip is composed with the activation so it targets the virtualenv
    assert_eq!(plan.steps[1].command, ". venv/bin/activate && pip install pydub");
  }

  #[test]
  fn no_activation_step_without_venv() {
    let plan = compute_plan(&classify("linux-gnu"), false).unwrap();
    assert!(plan.steps.iter().all(|s| s.kind != StepKind::Activate));
    assert!(plan.steps.iter().all(|s| !s.command.contains("activate")));
  }

  #[test]
  fn planning_is_deterministic() {
    let support = classify("linux-gnu");
    let first = compute_plan(&support, true).unwrap();
    let second = compute_plan(&support, true).unwrap();
    assert_eq!(first, second);
  }

  #[test]
  fn plan_serializes_for_json_output() {
    let plan = compute_plan(&classify("linux-gnu"), false).unwrap();
    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["os"], "linux");
    assert_eq!(json["steps"][0]["command"], "pip install pydub");
    assert_eq!(json["steps"][0]["kind"], "audio_lib");
  }

  #[test]
  fn unsupported_platform_is_an_error() {
    let err = compute_plan(&classify("beos"), false).unwrap_err();
    assert!(matches!(err, InstallError::UnsupportedPlatform { .. }));
  }

  #[test]
  fn windows_venv_sources_scripts_activate_with_sh_semantics() {
    // Backslashes would be eaten by the msys/cygwin shell and a bare
    // invocation is command-not-found; the activate file must be sourced.
    let plan = compute_plan(&classify("cygwin"), true).unwrap();
    assert_eq!(plan.steps[0].command, ". venv/Scripts/activate");
    assert_eq!(plan.steps[1].command, ". venv/Scripts/activate && pip install pydub");
  }
}
