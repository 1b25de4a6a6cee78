//! User configuration loading for line-collection.
//!
//! User config location: $XDG_CONFIG_HOME/line-collection/line-collection.toml
//! Fallback: the platform config directory reported by `dirs::config_dir()`

use std::path::PathBuf;

use super::{Settings, load_settings};
use crate::error::Result;

const CONFIG_DIR_NAME: &str = "line-collection";
const CONFIG_FILE_NAME: &str = "line-collection.toml";

/// Returns the path to the user configuration file.
///
/// The path is determined by:
/// 1. If $XDG_CONFIG_HOME is set: $XDG_CONFIG_HOME/line-collection/line-collection.toml
/// 2. Otherwise: `dirs::config_dir()`/line-collection/line-collection.toml
///
/// Returns None if no config directory can be determined.
pub fn user_config_path() -> Option<PathBuf> {
    let base = match std::env::var_os("XDG_CONFIG_HOME") {
        Some(xdg_config) if !xdg_config.is_empty() => PathBuf::from(xdg_config),
        _ => dirs::config_dir()?,
    };
    Some(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load the user configuration file if it exists.
///
/// Returns `Ok(None)` when there is no config directory or no file.
///
/// # Errors
/// Returns an error when the file exists but cannot be read or parsed.
pub fn load_user_config() -> Result<Option<Settings>> {
    let Some(path) = user_config_path() else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }
    load_settings(&path).map(Some)
}
