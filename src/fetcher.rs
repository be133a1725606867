use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::download::download_file;
use crate::error::FetchError;
use crate::extract::extract_zip;
use crate::models::{Layout, Settings};
use crate::ui;
use crate::userconfig;

#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub version: String,
    pub set_as_default: bool,
    pub overwrite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The directory was (re)created; `downloaded` is false when a cached archive was reused.
    Fetched { dir: PathBuf, downloaded: bool },
    /// Nothing was fetched. `made_default` reports whether the config was pointed at it anyway.
    AlreadyPresent { dir: PathBuf, made_default: bool },
}

fn validate_version(version: &str) -> Result<(), FetchError> {
    let bad = version.is_empty()
        || version == "."
        || version == ".."
        || version
            .chars()
            .any(|c| c.is_whitespace() || c == '/' || c == '\\');
    if bad {
        return Err(FetchError::InvalidVersion(version.to_string()));
    }
    Ok(())
}

/// A half-unpacked release would otherwise count as installed on the next run.
fn discard_partial(tool_dir: &Path) {
    let removed = match fs::symlink_metadata(tool_dir) {
        Err(_) => return,
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(tool_dir),
        Ok(_) => fs::remove_file(tool_dir),
    };
    if let Err(err) = removed {
        eprintln!(
            "{} Could not remove partial {}: {}",
            "[WARN]".yellow(),
            tool_dir.display(),
            err
        );
    }
}

/// Makes sure the compressor release for `request.version` is unpacked under
/// the library root, and records it as the active one when it had to be
/// fetched or when `set_as_default` is asked for.
pub fn get_yui_compressor(
    layout: &Layout,
    settings: &Settings,
    request: &FetchRequest,
) -> Result<FetchOutcome, FetchError> {
    let version = request.version.as_str();
    validate_version(version)?;

    let lib_dir = &layout.lib_dir;
    if !lib_dir.exists() {
        fs::create_dir_all(lib_dir).map_err(|e| FetchError::fs(lib_dir, e))?;
    }

    let tool_dir = layout.tool_dir(version);

    if request.overwrite && tool_dir.exists() {
        println!("{} Removing {}", "[*]".blue(), tool_dir.display());
        fs::remove_dir_all(&tool_dir).map_err(|e| FetchError::fs(&tool_dir, e))?;
    }

    if !tool_dir.exists() {
        let archive = layout.archive_path(version);
        let mut downloaded = false;

        if !archive.exists() {
            let url = settings.download_url(version);
            println!("{} Downloading {}", "[*]".blue(), url);
            let bytes = download_file(&url, &archive)?;
            println!("{} Saved {} ({})", "✓".green(), archive.display(), ui::format_bytes(bytes));
            downloaded = true;
        } else {
            tracing::debug!("Using cached archive {}", archive.display());
        }

        let unpacked = extract_zip(&archive, lib_dir).and_then(|entries| {
            tracing::debug!("Extracted {} entries from {}", entries, archive.display());
            if tool_dir.is_dir() {
                Ok(())
            } else {
                Err(FetchError::ExtractedDirMissing {
                    archive: archive.clone(),
                    expected: tool_dir.clone(),
                })
            }
        });
        if let Err(err) = unpacked {
            discard_partial(&tool_dir);
            return Err(err);
        }

        userconfig::set_default_lib(&layout.config_file, &tool_dir)?;
        return Ok(FetchOutcome::Fetched {
            dir: tool_dir,
            downloaded,
        });
    }

    println!("{} yui compressor {} already downloaded", "[i]".blue(), version);

    if request.set_as_default {
        userconfig::set_default_lib(&layout.config_file, &tool_dir)?;
    }

    Ok(FetchOutcome::AlreadyPresent {
        dir: tool_dir,
        made_default: request.set_as_default,
    })
}
