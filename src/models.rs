use std::path::{Path, PathBuf};
use std::time::SystemTime;

pub const TOOL_DIR_PREFIX: &str = "yuicompressor-";

/// Settings for the CLI itself, stored as TOML under the user's config dir.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Compressor release fetched when no version is given on the command line.
    pub default_version: String,
    /// Download URL; `{zip_name}` and `{version}` are substituted.
    pub url_template: String,
    /// Library root, relative to the project root.
    pub lib_dir: PathBuf,
    /// INI file recording the active compressor, relative to the project root.
    pub config_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_version: String::from("2.4.2"),
            url_template: String::from("http://www.julienlecomte.net/yuicompressor/{zip_name}"),
            lib_dir: PathBuf::from("lib"),
            config_file: PathBuf::from(".jstools.cfg"),
        }
    }
}

impl Settings {
    pub fn download_url(&self, version: &str) -> String {
        self.url_template
            .replace("{zip_name}", &zip_name(version))
            .replace("{version}", version)
    }
}

pub fn zip_name(version: &str) -> String {
    format!("{TOOL_DIR_PREFIX}{version}.zip")
}

pub fn tool_dir_name(version: &str) -> String {
    format!("{TOOL_DIR_PREFIX}{version}")
}

/// Where things live for one project checkout.
#[derive(Debug, Clone)]
pub struct Layout {
    pub lib_dir: PathBuf,
    pub config_file: PathBuf,
}

impl Layout {
    pub fn new(root: &Path, settings: &Settings) -> Self {
        Self {
            lib_dir: root.join(&settings.lib_dir),
            config_file: root.join(&settings.config_file),
        }
    }

    pub fn tool_dir(&self, version: &str) -> PathBuf {
        self.lib_dir.join(tool_dir_name(version))
    }

    pub fn archive_path(&self, version: &str) -> PathBuf {
        self.lib_dir.join(zip_name(version))
    }
}

#[derive(Debug, Clone)]
pub struct InstalledVersion {
    pub version: String,
    pub path: PathBuf,
    pub modified: Option<SystemTime>,
    pub is_default: bool,
}
