mod image;
mod info;
mod install;
mod plan;

pub use image::{MultimediaArg, cmd_image};
pub use info::cmd_info;
pub use install::cmd_install;
pub use plan::cmd_plan;
