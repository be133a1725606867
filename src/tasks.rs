//! Named build steps and their prerequisites.
//!
//! Running a task runs its plan: every prerequisite first, each step once.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    CreateUserConfig,
    GetYuiCompressor,
    Install,
}

impl Task {
    pub fn name(self) -> &'static str {
        match self {
            Task::CreateUserConfig => "create-userconfig",
            Task::GetYuiCompressor => "get-yuicomp",
            Task::Install => "install",
        }
    }

    pub fn prerequisites(self) -> &'static [Task] {
        match self {
            Task::CreateUserConfig => &[],
            Task::GetYuiCompressor => &[Task::CreateUserConfig],
            Task::Install => &[Task::GetYuiCompressor],
        }
    }
}

pub fn plan(target: Task) -> Vec<Task> {
    fn visit(task: Task, out: &mut Vec<Task>) {
        for &pre in task.prerequisites() {
            visit(pre, out);
        }
        if !out.contains(&task) {
            out.push(task);
        }
    }

    let mut out = Vec::new();
    visit(target, &mut out);
    out
}
