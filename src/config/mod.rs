mod schema;
mod storage;

pub use schema::Settings;
pub use storage::{load_settings, save_settings};

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Get the config directory path (~/.config/mood-score/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("mood-score"))
}

/// Get the default settings file path (~/.config/mood-score/settings.yaml)
pub fn get_settings_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("settings.yaml"))
}

/// Resolve the settings path: an explicit `--settings` path wins over the default
pub fn resolve_settings_path(path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(p) => Ok(p),
        None => get_settings_path(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let explicit = PathBuf::from("/tmp/custom-settings.yaml");
        assert_eq!(resolve_settings_path(Some(explicit.clone())).unwrap(), explicit);
    }

    #[test]
    fn test_default_path_shape() {
        if let Ok(path) = get_settings_path() {
            assert!(path.ends_with(".config/mood-score/settings.yaml"));
        }
    }
}
