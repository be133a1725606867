use anyhow::Result;
use colored::Colorize;
use tabled::settings::style::Style;
use tabled::Table;

use super::Project;
use crate::fs_scanner::scan_installed;
use crate::ui::{self, InstalledRow};
use crate::userconfig::default_lib;

pub fn run(project: &Project) -> Result<()> {
    let lib_dir = &project.layout.lib_dir;
    ui::print_header("Installed YUI Compressor versions");

    if !lib_dir.exists() {
        eprintln!(
            "{} Directory {} does not exist. Run get-yuicomp first.",
            "[!]".yellow(),
            lib_dir.display()
        );
        return Ok(());
    }

    let active = default_lib(&project.layout.config_file)?;
    let installed = scan_installed(lib_dir, active.as_deref());

    if installed.is_empty() {
        println!("{} Nothing installed in {}", "[i]".blue(), lib_dir.display());
        return Ok(());
    }

    let rows: Vec<InstalledRow> = installed.iter().map(InstalledRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");

    if active.is_some() && !installed.iter().any(|v| v.is_default) {
        println!(
            "{} The release recorded in {} is not under {}",
            "[!]".yellow(),
            project.layout.config_file.display(),
            lib_dir.display()
        );
    }

    Ok(())
}
