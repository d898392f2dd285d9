use super::schema::Settings;
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Load settings from a YAML file
///
/// If the file doesn't exist or is empty, returns the defaults.
/// Keys missing from the file keep their default value.
pub fn load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file at {}", path.display()))?;

    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    let settings: Settings = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse settings: invalid YAML in {}", path.display()))?;

    Ok(settings)
}

/// Save the full settings record atomically
///
/// Uses atomic-write-file so an interrupted save never leaves a truncated file.
/// Creates the parent directory if it doesn't exist.
pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let yaml = serde_saphyr::to_string(settings)
        .map_err(|e| anyhow::anyhow!("Failed to serialize settings: {}", e))?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    file.write_all(yaml.as_bytes())
        .context("Failed to write settings")?;

    file.commit().context("Failed to save settings")?;

    Ok(())
}
