//! Command execution for install steps.
//!
//! [`CommandRunner`] is the seam between install plans and the host: the real
//! [`ShellRunner`] hands commands to the system shell, while [`TraceRunner`]
//! records the exact sequence that would be issued. Branch behavior is tested
//! against traces, never against real package managers.

use tokio::process::Command;
use tracing::{debug, info};

/// Outcome of running a single command.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RunStatus {
  Success,
  Failed {
    code: Option<i32>,
    message: Option<String>,
  },
}

impl RunStatus {
  pub fn is_success(&self) -> bool {
    matches!(self, RunStatus::Success)
  }
}

/// Executes install commands.
pub trait CommandRunner {
  fn run(&mut self, command: &str) -> impl Future<Output = RunStatus>;
}

/// Runs commands through the system shell, streaming output to the operator.
///
/// Unlike a hermetic build executor, the runner deliberately inherits the
/// ambient environment: installing into the host (or an activated virtualenv)
/// is the whole point.
#[derive(Debug, Default)]
pub struct ShellRunner {
  shell: Option<String>,
}

impl ShellRunner {
  pub fn new() -> Self {
    Self::default()
  }

  /// Use a specific shell instead of the platform default.
  pub fn with_shell(shell: impl Into<String>) -> Self {
    Self { shell: Some(shell.into()) }
  }
}

impl CommandRunner for ShellRunner {
  async fn run(&mut self, command: &str) -> RunStatus {
    info!(cmd = %command, "executing command");

    let (shell_cmd, shell_args) = get_shell(self.shell.as_deref());
    debug!(shell = %shell_cmd, "spawning process");

    let status = Command::new(&shell_cmd).args(&shell_args).arg(command).status().await;

    match status {
      Ok(status) if status.success() => RunStatus::Success,
      Ok(status) => RunStatus::Failed {
        code: status.code(),
        message: None,
      },
      Err(err) => RunStatus::Failed {
        code: None,
        message: Some(err.to_string()),
      },
    }
  }
}

/// Records commands instead of executing them.
///
/// Backs the CLI dry-run path and the trace-capture tests. By default every
/// command reports success; [`TraceRunner::fail_when_contains`] scripts
/// failures for specific commands.
#[derive(Debug, Default)]
pub struct TraceRunner {
  commands: Vec<String>,
  fail_patterns: Vec<String>,
}

impl TraceRunner {
  pub fn new() -> Self {
    Self::default()
  }

  /// Report failure (exit code 1) for any command containing `pattern`.
  pub fn fail_when_contains(mut self, pattern: impl Into<String>) -> Self {
    self.fail_patterns.push(pattern.into());
    self
  }

  /// The commands issued so far, in order.
  pub fn commands(&self) -> &[String] {
    &self.commands
  }
}

impl CommandRunner for TraceRunner {
  async fn run(&mut self, command: &str) -> RunStatus {
    self.commands.push(command.to_string());
    if self.fail_patterns.iter().any(|p| command.contains(p.as_str())) {
      RunStatus::Failed {
        code: Some(1),
        message: None,
      }
    } else {
      RunStatus::Success
    }
  }
}

/// Get the shell command and arguments for the current platform.
///
/// Defaults to `/bin/sh` on Unix and PowerShell on Windows. When the operator
/// overrides the shell, the flag style is inferred from its name.
fn get_shell(override_shell: Option<&str>) -> (String, Vec<String>) {
  if let Some(shell) = override_shell {
    let args = if shell.contains("powershell") || shell.contains("pwsh") {
      vec!["-NoProfile".to_string(), "-Command".to_string()]
    } else if shell.contains("cmd") {
      vec!["/C".to_string()]
    } else {
      vec!["-c".to_string()]
    };
    return (shell.to_string(), args);
  }

  #[cfg(unix)]
  {
    ("/bin/sh".to_string(), vec!["-c".to_string()])
  }

  #[cfg(windows)]
  {
    (
      "powershell.exe".to_string(),
      vec![
        "-NoProfile".to_string(),
        "-ExecutionPolicy".to_string(),
        "Bypass".to_string(),
        "-Command".to_string(),
      ],
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn shell_runner_reports_success() {
    let mut runner = ShellRunner::new();
    let status = runner.run("true").await;
    assert_eq!(status, RunStatus::Success);
  }

  #[tokio::test]
  #[cfg(unix)]
  async fn shell_runner_reports_exit_code() {
    let mut runner = ShellRunner::new();
    let status = runner.run("exit 3").await;
    assert_eq!(
      status,
      RunStatus::Failed {
        code: Some(3),
        message: None
      }
    );
  }

  #[tokio::test]
  async fn shell_runner_reports_spawn_failure() {
    let mut runner = ShellRunner::with_shell("/nonexistent/shell");
    let status = runner.run("true").await;
    assert!(matches!(status, RunStatus::Failed { code: None, message: Some(_) }));
  }

  #[tokio::test]
  async fn trace_runner_records_commands_in_order() {
    let mut runner = TraceRunner::new();
    runner.run("first").await;
    runner.run("second").await;
    assert_eq!(runner.commands(), &["first", "second"]);
  }

  #[tokio::test]
  async fn trace_runner_scripts_failures() {
    let mut runner = TraceRunner::new().fail_when_contains("brew");
    assert_eq!(runner.run("pip install pydub").await, RunStatus::Success);
    assert!(!runner.run("brew install ffmpeg").await.is_success());
  }

  #[test]
  fn get_shell_with_override() {
    let (shell, args) = get_shell(Some("/usr/bin/bash"));
    assert_eq!(shell, "/usr/bin/bash");
    assert_eq!(args, vec!["-c"]);
  }

  #[test]
  fn get_shell_with_powershell_override() {
    let (shell, args) = get_shell(Some("pwsh"));
    assert_eq!(shell, "pwsh");
    assert_eq!(args, vec!["-NoProfile", "-Command"]);
  }

  #[test]
  fn get_shell_default() {
    let (shell, args) = get_shell(None);
    #[cfg(unix)]
    {
      assert_eq!(shell, "/bin/sh");
      assert_eq!(args, vec!["-c"]);
    }
    #[cfg(windows)]
    {
      assert_eq!(shell, "powershell.exe");
      assert_eq!(args[0], "-NoProfile");
    }
  }
}
