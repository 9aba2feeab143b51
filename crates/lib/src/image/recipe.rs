//! Dockerfile rendering.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::consts;

/// Errors from recipe rendering and build-context checks.
#[derive(Debug, Error)]
pub enum ImageError {
  /// Declared build-context paths missing from the context directory.
  #[error("build context is missing required path(s): {}", .0.join(", "))]
  MissingContextPaths(Vec<String>),

  /// I/O error while checking the context or writing the Dockerfile.
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}

/// Whether the image carries the native multimedia framework (ffmpeg).
///
/// Whether the service actually needs it at runtime is a deployment decision
/// the original recipes left ambiguous. There is deliberately no default:
/// every caller has to pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Multimedia {
  Enabled,
  Disabled,
}

impl Multimedia {
  /// What the resulting image can and cannot do.
  pub fn capability_note(&self) -> &'static str {
    match self {
      Self::Enabled => "image includes ffmpeg; audio-processing endpoints are fully supported",
      Self::Disabled => "image omits ffmpeg; audio-processing endpoints will fail at runtime",
    }
  }
}

impl fmt::Display for Multimedia {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Enabled => write!(f, "enabled"),
      Self::Disabled => write!(f, "disabled"),
    }
  }
}

/// The canonical container recipe for the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRecipe {
  pub base_image: String,
  pub workdir: String,
  pub multimedia: Multimedia,
  pub port: u16,
  /// Import path of the ASGI application object uvicorn serves.
  pub app_object: String,
}

impl ImageRecipe {
  pub fn new(multimedia: Multimedia) -> Self {
    Self {
      base_image: consts::BASE_IMAGE.to_string(),
      workdir: consts::IMAGE_WORKDIR.to_string(),
      multimedia,
      port: consts::APP_PORT,
      app_object: consts::ASGI_APP.to_string(),
    }
  }

  /// Render the Dockerfile.
  ///
  /// Layer ordering is part of the contract: the dependency manifest is
  /// copied and installed before any application source, so editing source
  /// files never invalidates the dependency layer cache.
  pub fn render(&self) -> String {
    let mut lines = Vec::new();

    lines.push(format!("FROM {}", self.base_image));
    lines.push(String::new());
    lines.push(format!("WORKDIR {}", self.workdir));
    lines.push(String::new());

    if self.multimedia == Multimedia::Enabled {
      lines.push(
        "RUN apt-get update && apt-get install -y --no-install-recommends ffmpeg \
         && rm -rf /var/lib/apt/lists/*"
          .to_string(),
      );
      lines.push(String::new());
    }

    lines.push("COPY requirements/ requirements/".to_string());
    lines.push(format!("RUN pip install --no-cache-dir -r {}", consts::REQUIREMENTS_FILE));
    lines.push(String::new());
    lines.push("COPY alembic.ini ./".to_string());
    lines.push("COPY alembic/ alembic/".to_string());
    lines.push("COPY app/ app/".to_string());
    lines.push(String::new());
    lines.push(format!("EXPOSE {}", self.port));
    lines.push(format!(
      "CMD [\"uvicorn\", \"{}\", \"--host\", \"0.0.0.0\", \"--port\", \"{}\"]",
      self.app_object, self.port
    ));

    let mut out = lines.join("\n");
    out.push('\n');
    out
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn copy_lines(rendered: &str) -> Vec<&str> {
    rendered.lines().filter(|l| l.starts_with("COPY ")).collect()
  }

  #[test]
  fn renders_exactly_four_copied_paths() {
    let rendered = ImageRecipe::new(Multimedia::Enabled).render();
    assert_eq!(
      copy_lines(&rendered),
      vec![
        "COPY requirements/ requirements/",
        "COPY alembic.ini ./",
        "COPY alembic/ alembic/",
        "COPY app/ app/",
      ]
    );
  }

  #[test]
  fn installs_from_exactly_one_requirements_file() {
    let rendered = ImageRecipe::new(Multimedia::Disabled).render();
    let installs: Vec<_> = rendered.lines().filter(|l| l.contains("pip install")).collect();
    assert_eq!(
      installs,
      vec!["RUN pip install --no-cache-dir -r requirements/requirements.txt"]
    );
  }

  #[test]
  fn dependency_layer_precedes_application_source() {
    let rendered = ImageRecipe::new(Multimedia::Enabled).render();
    let manifest_copy = rendered.find("COPY requirements/").unwrap();
    let dep_install = rendered.find("RUN pip install").unwrap();
    let source_copy = rendered.find("COPY app/").unwrap();
    assert!(manifest_copy < dep_install);
    assert!(dep_install < source_copy);
  }

  #[test]
  fn multimedia_enabled_installs_ffmpeg() {
    let rendered = ImageRecipe::new(Multimedia::Enabled).render();
    assert!(rendered.contains("apt-get install -y --no-install-recommends ffmpeg"));
  }

  #[test]
  fn multimedia_disabled_omits_ffmpeg() {
    let rendered = ImageRecipe::new(Multimedia::Disabled).render();
    assert!(!rendered.contains("ffmpeg"));
  }

  #[test]
  fn exposes_port_and_starts_uvicorn() {
    let rendered = ImageRecipe::new(Multimedia::Disabled).render();
    assert!(rendered.contains("EXPOSE 8000"));
    assert!(
      rendered.contains(r#"CMD ["uvicorn", "app.main:app", "--host", "0.0.0.0", "--port", "8000"]"#)
    );
  }

  #[test]
  fn base_image_is_pinned_slim_runtime() {
    let rendered = ImageRecipe::new(Multimedia::Enabled).render();
    assert!(rendered.starts_with("FROM python:3.11-slim\n"));
    assert!(rendered.contains("WORKDIR /app"));
  }

  #[test]
  fn capability_notes_differ_by_variant() {
    assert!(Multimedia::Enabled.capability_note().contains("supported"));
    assert!(Multimedia::Disabled.capability_note().contains("fail"));
  }
}
