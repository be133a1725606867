use anyhow::Result;
use colored::Colorize;

use super::Project;
use crate::userconfig::default_lib;

pub fn run(project: &Project) -> Result<()> {
    match default_lib(&project.layout.config_file)? {
        Some(dir) if dir.is_dir() => {
            println!("{} Active yui compressor: {}", "✓".green().bold(), dir.display());
        }
        Some(dir) => {
            eprintln!(
                "{} {} points at {}, which does not exist.",
                "[!]".yellow(),
                project.layout.config_file.display(),
                dir.display()
            );
        }
        None => {
            eprintln!(
                "{} No active yui compressor recorded. Run get-yuicomp --set-as-default.",
                "[!]".yellow()
            );
        }
    }
    Ok(())
}
