//! Container image recipe.
//!
//! One canonical, parameterized recipe replaces the two near-duplicate
//! Dockerfiles that used to drift apart: whether the image carries the native
//! multimedia framework is an explicit [`Multimedia`] decision, never a
//! copy-paste variant.

mod context;
mod recipe;

pub use context::{REQUIRED_CONTEXT_PATHS, check_context, write_dockerfile};
pub use recipe::{ImageError, ImageRecipe, Multimedia};
