use chrono::{DateTime, Local};
use colored::Colorize;
use std::path::PathBuf;
use tabled::Tabled;

use crate::models::InstalledVersion;

#[derive(Tabled)]
pub struct InstalledRow {
    #[tabled(rename = "")]
    pub marker: &'static str,

    #[tabled(rename = "VERSION")]
    pub version: String,

    #[tabled(rename = "MODIFIED")]
    pub modified: String,

    #[tabled(rename = "PATH")]
    pub path: String,
}

impl From<&InstalledVersion> for InstalledRow {
    fn from(v: &InstalledVersion) -> Self {
        Self {
            marker: if v.is_default { "*" } else { "" },
            version: v.version.clone(),
            modified: format_date_short(v.modified),
            path: v.path.display().to_string(),
        }
    }
}

pub fn print_header(title: &str) {
    println!("{}", "─".repeat(60).dimmed());
    println!("{}", title.cyan().bold());
    println!("{}", "─".repeat(60).dimmed());
}

/// Resolves a leading `~` in a `--settings` path.
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = || dirs::home_dir().unwrap_or_else(|| PathBuf::from("~"));
    match path.strip_prefix('~') {
        Some("") => home(),
        Some(rest) if rest.starts_with(['/', '\\']) => home().join(&rest[1..]),
        _ => PathBuf::from(path),
    }
}

/// Archive sizes: bytes below 1 KiB, otherwise KB or MB with one decimal.
pub fn format_bytes(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * 1024;
    match bytes {
        b if b >= MIB => format!("{:.1} MB", b as f64 / MIB as f64),
        b if b >= KIB => format!("{:.1} KB", b as f64 / KIB as f64),
        b => format!("{b} B"),
    }
}

// YYYY-MM-DD in local time
pub fn format_date_short(value: Option<std::time::SystemTime>) -> String {
    match value {
        Some(t) => DateTime::<Local>::from(t).format("%Y-%m-%d").to_string(),
        None => "-".to_string(),
    }
}
