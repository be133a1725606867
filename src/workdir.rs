use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Held by whoever has moved the process working directory.
pub(crate) static CWD_LOCK: Mutex<()> = Mutex::new(());

/// Switches the process into `dir` until dropped, then switches back.
///
/// The working directory is process-global, so the guard also holds
/// [`CWD_LOCK`] for its whole lifetime.
pub struct WorkingDir {
    previous: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl WorkingDir {
    pub fn enter(dir: &Path) -> io::Result<Self> {
        let lock = CWD_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let previous = env::current_dir()?;
        env::set_current_dir(dir)?;
        tracing::debug!("cwd {} -> {}", previous.display(), dir.display());

        Ok(Self {
            previous,
            _lock: lock,
        })
    }

    pub fn previous(&self) -> &Path {
        &self.previous
    }
}

impl Drop for WorkingDir {
    fn drop(&mut self) {
        if let Err(err) = env::set_current_dir(&self.previous) {
            tracing::error!(
                "Failed to restore working directory {}: {}",
                self.previous.display(),
                err
            );
        }
    }
}
