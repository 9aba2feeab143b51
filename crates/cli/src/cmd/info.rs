//! Implementation of the `codeckit info` command.

use anyhow::Result;

use codeckit_lib::consts;
use codeckit_lib::platform::{Support, detect};

use crate::output;

pub fn cmd_info() -> Result<()> {
  println!("codeckit v{}", env!("CARGO_PKG_VERSION"));
  println!();

  let os_type = std::env::var("OSTYPE").unwrap_or_else(|_| "(unset)".to_string());
  output::print_stat("OSTYPE", &os_type);

  match detect() {
    Support::Supported { os } => output::print_stat("Platform", os.as_str()),
    Support::Unsupported { os_type } => {
      output::print_stat("Platform", &format!("unsupported ({})", os_type))
    }
  }

  let venv = std::path::Path::new(consts::VENV_DIR).is_dir();
  output::print_stat("Virtualenv", if venv { "present" } else { "absent" });

  Ok(())
}
