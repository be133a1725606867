mod cli;
mod commands;
mod config;
mod download;
mod error;
mod extract;
mod fetcher;
mod fs_scanner;
mod models;
mod tasks;
mod ui;
mod userconfig;
mod workdir;

#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Commands, FetchArgs};
use crate::commands::Project;
use crate::models::Layout;
use crate::tasks::Task;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    let settings_path = match &cli.settings {
        Some(p) => ui::expand_tilde(p),
        None => config::settings_file_path(),
    };
    let settings = config::load_settings(&settings_path)?;

    let root = std::env::current_dir().context("Failed to resolve the current directory")?;
    let project = Project {
        layout: Layout::new(&root, &settings),
        settings,
    };

    match cli.command {
        Commands::CreateUserconfig => {
            commands::run_task(Task::CreateUserConfig, &project, &FetchArgs::default())
        }
        Commands::GetYuicomp(args) => commands::run_task(Task::GetYuiCompressor, &project, &args),
        Commands::Install(args) => commands::run_task(Task::Install, &project, &args),
        Commands::List => commands::list::run(&project),
    }
}
