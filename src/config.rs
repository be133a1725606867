use anyhow::Context;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Settings;

pub fn settings_file_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("jstools").join("config.toml")
}

/// Loads settings from `path`, writing the defaults there on first use.
pub fn load_settings(path: &Path) -> Result<Settings> {
    if path.exists() {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        let settings: Settings = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse settings TOML: {}", path.display()))?;
        return Ok(settings);
    }

    let settings = Settings::default();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create settings directory: {}", parent.display()))?;
    }

    let raw = toml::to_string_pretty(&settings).context("Failed to serialize default settings")?;
    fs::write(path, raw)
        .with_context(|| format!("Failed to write default settings: {}", path.display()))?;

    Ok(settings)
}
