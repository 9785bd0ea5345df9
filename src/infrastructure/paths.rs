//! Path utilities for the Zellij sandbox environment.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, which
//! normally resolves to the directory Zellij was started from.

use std::path::{Path, PathBuf};

/// Returns the data directory for Jiffy files (trace output).
///
/// # Examples
///
/// ```
/// use jiffy::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str().unwrap(), "/host/.local/share/zellij/jiffy");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("jiffy")
}

/// Maps a user-supplied path (possibly `~`-prefixed) into the sandbox.
///
/// # Examples
///
/// ```
/// use jiffy::infrastructure::sandbox_path;
///
/// assert_eq!(sandbox_path("~/themes/dark.toml").to_str(), Some("/host/themes/dark.toml"));
/// assert_eq!(sandbox_path("~").to_str(), Some("/host"));
/// assert_eq!(sandbox_path("/etc/jiffy.toml").to_str(), Some("/etc/jiffy.toml"));
/// ```
#[must_use]
pub fn sandbox_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        Path::new("/host").join(rest)
    } else if path == "~" {
        PathBuf::from("/host")
    } else {
        PathBuf::from(path)
    }
}
