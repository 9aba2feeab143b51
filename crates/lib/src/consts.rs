//! Shared constants for install plans and image recipes.

/// The audio-manipulation library installed on every supported platform.
pub const AUDIO_LIB: &str = "pydub";

/// Native codec packages installed through Homebrew on macOS.
pub const DARWIN_NATIVE_PACKAGES: [&str; 2] = ["ffmpeg", "libsndfile"];

/// Native codec packages installed through apt on GNU/Linux.
pub const LINUX_NATIVE_PACKAGES: [&str; 2] = ["ffmpeg", "libsndfile1"];

/// Relative path of the optional isolated Python environment.
pub const VENV_DIR: &str = "venv";

/// Where Windows operators are pointed for a manual ffmpeg install.
pub const FFMPEG_DOWNLOAD_URL: &str = "https://ffmpeg.org/download.html";

/// Companion utility for verifying that audio files actually load.
pub const AUDIO_CHECK_HINT: &str = "python test_audio_loading.py <audio-file>";

/// Base image for the service container.
pub const BASE_IMAGE: &str = "python:3.11-slim";

/// Working directory inside the container.
pub const IMAGE_WORKDIR: &str = "/app";

/// Port the ASGI server binds to.
pub const APP_PORT: u16 = 8000;

/// Import path of the ASGI application object.
pub const ASGI_APP: &str = "app.main:app";

/// Dependency manifest installed into the image.
pub const REQUIREMENTS_FILE: &str = "requirements/requirements.txt";
