use std::cmp::Ordering;
use std::path::Path;
use walkdir::WalkDir;

use crate::models::{InstalledVersion, TOOL_DIR_PREFIX};

/// Lists `yuicompressor-*` directories directly under `lib_dir`, oldest version first.
pub fn scan_installed(lib_dir: &Path, default_lib: Option<&Path>) -> Vec<InstalledVersion> {
    let mut installed = Vec::new();

    for entry in WalkDir::new(lib_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        let Some(version) = name.strip_prefix(TOOL_DIR_PREFIX) else {
            continue;
        };
        if version.is_empty() {
            continue;
        }

        let path = entry.path();
        installed.push(InstalledVersion {
            version: version.to_string(),
            path: path.to_path_buf(),
            modified: entry.metadata().ok().and_then(|m| m.modified().ok()),
            is_default: default_lib.is_some_and(|d| d == path),
        });
    }

    installed.sort_by(|a, b| compare_versions(&a.version, &b.version));
    installed
}

/// Dotted comparison: numeric parts compare as numbers, anything else as text.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let mut left = a.split('.');
    let mut right = b.split('.');

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => {
                let ord = match (l.parse::<u64>(), r.parse::<u64>()) {
                    (Ok(l), Ok(r)) => l.cmp(&r),
                    _ => l.cmp(r),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}
