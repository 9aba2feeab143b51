//! Host platform classification.
//!
//! The installer branches on an `$OSTYPE`-style identifier string. Instead of
//! the historical silent no-op for unrecognized values, classification returns
//! a tagged [`Support`] outcome the caller has to handle.

use std::env;
use std::fmt;

use serde::Serialize;

/// Operating systems the installer knows how to provision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
  Darwin,
  Linux,
  Windows,
}

impl Os {
  /// Returns the lowercase string identifier for this OS
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Darwin => "darwin",
      Self::Linux => "linux",
      Self::Windows => "windows",
    }
  }
}

impl fmt::Display for Os {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Whether the host platform is one the installer can provision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "support", rename_all = "lowercase")]
pub enum Support {
  Supported { os: Os },
  Unsupported { os_type: String },
}

/// Classify an `$OSTYPE`-style identifier string.
///
/// Recognized families:
/// - `darwin*` (e.g. `darwin19.0`) -> macOS
/// - `linux-gnu` and other `linux*` values -> GNU/Linux
/// - `msys`, `cygwin`, `win32` -> Windows-compatible shells
///
/// Anything else is `Unsupported`, preserving the original identifier so the
/// operator sees what was detected.
pub fn classify(os_type: &str) -> Support {
  let id = os_type.trim().to_lowercase();
  if id.starts_with("darwin") {
    Support::Supported { os: Os::Darwin }
  } else if id.starts_with("linux") {
    Support::Supported { os: Os::Linux }
  } else if id.starts_with("msys") || id.starts_with("cygwin") || id == "win32" {
    Support::Supported { os: Os::Windows }
  } else {
    Support::Unsupported { os_type: os_type.to_string() }
  }
}

/// Detect the host platform.
///
/// Reads the ambient `OSTYPE` variable first so shells (and tests) can steer
/// the branch; falls back to the compile-time OS when it is unset.
pub fn detect() -> Support {
  match env::var("OSTYPE") {
    Ok(os_type) if !os_type.trim().is_empty() => classify(&os_type),
    _ => match env::consts::OS {
      "macos" => Support::Supported { os: Os::Darwin },
      "linux" => Support::Supported { os: Os::Linux },
      "windows" => Support::Supported { os: Os::Windows },
      other => Support::Unsupported { os_type: other.to_string() },
    },
  }
}
