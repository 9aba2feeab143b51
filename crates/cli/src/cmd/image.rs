//! Implementation of the `codeckit image` command.

use std::path::Path;

use anyhow::{Result, bail};
use clap::ValueEnum;
use tracing::info;

use codeckit_lib::image::{ImageRecipe, Multimedia, check_context, write_dockerfile};

use crate::output;

/// CLI mapping for the required multimedia decision.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MultimediaArg {
  Enabled,
  Disabled,
}

impl From<MultimediaArg> for Multimedia {
  fn from(arg: MultimediaArg) -> Self {
    match arg {
      MultimediaArg::Enabled => Multimedia::Enabled,
      MultimediaArg::Disabled => Multimedia::Disabled,
    }
  }
}

pub fn cmd_image(
  multimedia: MultimediaArg,
  print: bool,
  output_dir: &Path,
  context: Option<&Path>,
) -> Result<()> {
  if let Some(context) = context
    && let Err(err) = check_context(context)
  {
    output::print_error(&err.to_string());
    bail!("build context check failed");
  }

  let recipe = ImageRecipe::new(multimedia.into());
  info!(multimedia = %recipe.multimedia, "rendering image recipe");

  if print {
    print!("{}", recipe.render());
    return Ok(());
  }

  let path = write_dockerfile(&recipe, output_dir)?;
  output::print_success(&format!("Wrote {}", path.display()));
  output::print_info(recipe.multimedia.capability_note());

  Ok(())
}
