//! Build-context checks and Dockerfile output.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::image::recipe::{ImageError, ImageRecipe};

/// The build-context paths the recipe copies, relative to the context root.
pub const REQUIRED_CONTEXT_PATHS: [&str; 4] = ["app", "requirements", "alembic.ini", "alembic"];

/// Verify that a build context contains every path the recipe copies.
///
/// The build engine would fail on the first missing COPY anyway; checking up
/// front reports all missing paths at once.
pub fn check_context(root: &Path) -> Result<(), ImageError> {
  let missing: Vec<String> = REQUIRED_CONTEXT_PATHS
    .iter()
    .filter(|p| !root.join(p).exists())
    .map(|p| p.to_string())
    .collect();

  if missing.is_empty() {
    Ok(())
  } else {
    Err(ImageError::MissingContextPaths(missing))
  }
}

/// Write the rendered recipe to `<dir>/Dockerfile`, returning its path.
pub fn write_dockerfile(recipe: &ImageRecipe, dir: &Path) -> Result<PathBuf, ImageError> {
  let path = dir.join("Dockerfile");
  fs::write(&path, recipe.render())?;
  debug!(path = %path.display(), multimedia = %recipe.multimedia, "wrote Dockerfile");
  Ok(path)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::image::recipe::Multimedia;
  use tempfile::TempDir;

  fn full_context() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("app")).unwrap();
    fs::create_dir(temp.path().join("requirements")).unwrap();
    fs::create_dir(temp.path().join("alembic")).unwrap();
    fs::write(temp.path().join("alembic.ini"), "[alembic]\n").unwrap();
    temp
  }

  #[test]
  fn complete_context_passes() {
    let temp = full_context();
    assert!(check_context(temp.path()).is_ok());
  }

  #[test]
  fn missing_paths_are_all_enumerated() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("app")).unwrap();

    let err = check_context(temp.path()).unwrap_err();
    match err {
      ImageError::MissingContextPaths(missing) => {
        assert_eq!(missing, vec!["requirements", "alembic.ini", "alembic"]);
      }
      other => panic!("unexpected error: {other}"),
    }
  }

  #[test]
  fn writes_dockerfile_into_directory() {
    let temp = TempDir::new().unwrap();
    let recipe = ImageRecipe::new(Multimedia::Enabled);

    let path = write_dockerfile(&recipe, temp.path()).unwrap();

    assert_eq!(path, temp.path().join("Dockerfile"));
    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, recipe.render());
  }
}
