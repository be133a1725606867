use ini::Ini;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub const SECTION: &str = "yui_compressor";
pub const LIB_KEY: &str = "lib";

/// Touches the config file if it is missing. Returns `true` when it was created.
pub fn ensure_exists(path: &Path) -> Result<bool, ConfigError> {
    if path.exists() {
        return Ok(false);
    }

    tracing::info!("Creating {}", path.display());
    fs::File::create(path).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(true)
}

fn load(path: &Path) -> Result<Ini, ConfigError> {
    if !path.exists() {
        return Ok(Ini::new());
    }
    Ini::load_from_file(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn save_atomic(path: &Path, conf: &Ini) -> Result<(), ConfigError> {
    let write_err = |source: std::io::Error| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };

    let tmp = path.with_extension("cfg.tmp");
    conf.write_to_file(&tmp).map_err(write_err)?;

    // Windows can't rename over an existing file; elsewhere rename replaces it atomically.
    #[cfg(windows)]
    if path.exists() {
        fs::remove_file(path).map_err(write_err)?;
    }

    fs::rename(&tmp, path).map_err(write_err)
}

/// Points the `lib` entry at `tool_dir`, updating the section in place if it exists.
pub fn set_default_lib(path: &Path, tool_dir: &Path) -> Result<(), ConfigError> {
    let mut conf = load(path)?;
    conf.with_section(Some(SECTION))
        .set(LIB_KEY, tool_dir.to_string_lossy().into_owned());
    save_atomic(path, &conf)?;

    tracing::debug!("{} {}.{} = {}", path.display(), SECTION, LIB_KEY, tool_dir.display());
    Ok(())
}

pub fn default_lib(path: &Path) -> Result<Option<PathBuf>, ConfigError> {
    let conf = load(path)?;
    Ok(conf.get_from(Some(SECTION), LIB_KEY).map(PathBuf::from))
}
