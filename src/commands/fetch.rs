use anyhow::{Context, Result};
use colored::Colorize;

use super::Project;
use crate::fetcher::{get_yui_compressor, FetchOutcome, FetchRequest};
use crate::ui;

pub fn run(project: &Project, request: &FetchRequest) -> Result<()> {
    ui::print_header(&format!("YUI Compressor {}", request.version));

    let outcome = get_yui_compressor(&project.layout, &project.settings, request)
        .with_context(|| format!("Could not get yui compressor {}", request.version))?;

    match &outcome {
        FetchOutcome::Fetched { dir, downloaded } => {
            let how = if *downloaded { "Downloaded" } else { "Unpacked cached archive" };
            println!("{} {} -> {}", "✓".green(), how, dir.display());
            println!(
                "{} {} now points at {}",
                "✓".green(),
                project.layout.config_file.display(),
                dir.display()
            );
        }
        FetchOutcome::AlreadyPresent { dir, made_default } => {
            if *made_default {
                println!(
                    "{} {} now points at {}",
                    "✓".green(),
                    project.layout.config_file.display(),
                    dir.display()
                );
            } else {
                println!(
                    "{} Use --set-as-default to make it active, or --overwrite to fetch again.",
                    "   ".dimmed()
                );
            }
        }
    }

    Ok(())
}
