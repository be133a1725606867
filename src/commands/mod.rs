use anyhow::Result;

use crate::cli::FetchArgs;
use crate::fetcher::FetchRequest;
use crate::models::{Layout, Settings};
use crate::tasks::{self, Task};

pub mod fetch;
pub mod install;
pub mod list;
pub mod userconfig;

/// Everything a task needs to know about the project it runs in.
pub struct Project {
    pub layout: Layout,
    pub settings: Settings,
}

impl Project {
    pub fn fetch_request(&self, args: &FetchArgs) -> FetchRequest {
        FetchRequest {
            version: args
                .compressor_version
                .clone()
                .unwrap_or_else(|| self.settings.default_version.clone()),
            set_as_default: args.set_as_default,
            overwrite: args.overwrite,
        }
    }
}

/// Runs `target` after its prerequisites.
pub fn run_task(target: Task, project: &Project, args: &FetchArgs) -> Result<()> {
    let steps = tasks::plan(target);
    tracing::debug!(
        "plan for {}: {}",
        target.name(),
        steps.iter().map(|t| t.name()).collect::<Vec<_>>().join(" -> ")
    );

    for step in steps {
        match step {
            Task::CreateUserConfig => userconfig::run(project)?,
            Task::GetYuiCompressor => fetch::run(project, &project.fetch_request(args))?,
            Task::Install => install::run(project)?,
        }
    }
    Ok(())
}
