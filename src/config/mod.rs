pub mod settings;
pub mod user;

pub use settings::Settings;
pub use user::{load_user_config, user_config_path};

use std::path::Path;

use crate::error::{Error, Result};

/// Parse a TOML settings file.
///
/// # Errors
/// Returns [`Error::Io`] when the file cannot be read and [`Error::Config`]
/// when its contents are not valid settings.
pub fn load_settings(path: &Path) -> Result<Settings> {
    let contents = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let settings =
        toml::from_str::<Settings>(&contents).map_err(|e| Error::config(path, e.to_string()))?;
    log::debug!(
        target: "line_collection::config",
        "Loaded settings from {}",
        path.display()
    );
    Ok(settings)
}

/// Merge two Settings, preferring values from `primary` over `fallback`
pub fn merge_settings(fallback: Option<Settings>, primary: Option<Settings>) -> Option<Settings> {
    match (fallback, primary) {
        (None, None) => None,
        (Some(settings), None) => Some(settings),
        (None, Some(settings)) => Some(settings),
        (Some(fallback), Some(primary)) => Some(Settings {
            position_encoding: primary.position_encoding.or(fallback.position_encoding),
        }),
    }
}

/// Merge layers in order of increasing precedence
pub fn merge_all(layers: &[Option<Settings>]) -> Option<Settings> {
    layers
        .iter()
        .cloned()
        .fold(None, |merged, layer| merge_settings(merged, layer))
}
