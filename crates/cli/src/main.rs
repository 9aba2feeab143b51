use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod output;

use output::OutputFormat;

/// codeckit - provisioning and packaging for the Audio Analyzer service
#[derive(Parser)]
#[command(name = "codeckit")]
#[command(author, version, about, long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Install the audio library and native codec packages
  Install {
    /// Project directory (looked up for the venv/ directory)
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Print the commands that would run instead of executing them
    #[arg(long)]
    dry_run: bool,

    /// Shell to execute install commands with (platform default if unset)
    #[arg(long)]
    shell: Option<String>,
  },

  /// Show the install command sequence for a platform
  Plan {
    /// Project directory (looked up for the venv/ directory)
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Classify this OS identifier instead of detecting the host
    #[arg(long)]
    os_type: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
  },

  /// Render the container image recipe
  Image {
    /// Whether the image carries the native multimedia framework (ffmpeg)
    #[arg(long, value_enum)]
    multimedia: cmd::MultimediaArg,

    /// Print the Dockerfile to stdout instead of writing it
    #[arg(long)]
    print: bool,

    /// Directory to write the Dockerfile to
    #[arg(long, default_value = ".")]
    output: PathBuf,

    /// Validate this build-context directory before rendering
    #[arg(long)]
    context: Option<PathBuf>,
  },

  /// Show the detected platform and environment
  Info,
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .without_time()
    .init();

  let cli = Cli::parse();

  match cli.command {
    Commands::Install { dir, dry_run, shell } => cmd::cmd_install(&dir, dry_run, shell.as_deref()),
    Commands::Plan { dir, os_type, format } => cmd::cmd_plan(&dir, os_type.as_deref(), format),
    Commands::Image {
      multimedia,
      print,
      output,
      context,
    } => cmd::cmd_image(multimedia, print, &output, context.as_deref()),
    Commands::Info => cmd::cmd_info(),
  }
}
