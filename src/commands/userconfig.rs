use anyhow::Result;
use colored::Colorize;

use super::Project;
use crate::userconfig::ensure_exists;

pub fn run(project: &Project) -> Result<()> {
    let path = &project.layout.config_file;
    if ensure_exists(path)? {
        println!("{} Created {}", "✓".green(), path.display());
    } else {
        tracing::debug!("{} already exists", path.display());
    }
    Ok(())
}
