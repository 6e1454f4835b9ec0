//! Host actions around a commit, and the output channel git output goes to.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::error::CommitError;

use super::executor::{VcsPort, git_args, run_checked};

/// Actions the surrounding host performs on the orchestrator's behalf.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Host: Send + Sync {
    /// Stage every change in the working tree.
    async fn stage_all(&self, cwd: &Path) -> Result<(), CommitError>;

    /// Refresh the host's view of the repository after a commit.
    async fn refresh(&self, cwd: &Path) -> Result<(), CommitError>;

    /// Synchronise with the remote.
    async fn sync(&self, cwd: &Path) -> Result<(), CommitError>;

    /// Show a failure to the user.
    fn notify_error(&self, message: &str);
}

/// Host for the command line: every action is a git command.
pub struct GitHost<V: VcsPort + ?Sized> {
    vcs: Arc<V>,
}

impl<V: VcsPort + ?Sized> GitHost<V> {
    pub fn new(vcs: Arc<V>) -> Self {
        Self { vcs }
    }
}

#[async_trait]
impl<V: VcsPort + ?Sized> Host for GitHost<V> {
    async fn stage_all(&self, cwd: &Path) -> Result<(), CommitError> {
        run_checked(self.vcs.as_ref(), &["add", "-A"], cwd).await?;
        Ok(())
    }

    async fn refresh(&self, cwd: &Path) -> Result<(), CommitError> {
        // update-index exits 1 when files need updating; that is not a failure.
        self.vcs
            .run(&git_args(&["update-index", "-q", "--refresh"]), cwd)
            .await?;
        Ok(())
    }

    async fn sync(&self, cwd: &Path) -> Result<(), CommitError> {
        run_checked(self.vcs.as_ref(), &["pull"], cwd).await?;
        run_checked(self.vcs.as_ref(), &["push"], cwd).await?;
        Ok(())
    }

    fn notify_error(&self, message: &str) {
        eprintln!("error: {}", message);
    }
}

/// Collects command output; shown to the user only once revealed.
#[derive(Debug, Default)]
pub struct OutputChannel {
    lines: Vec<String>,
    revealed: bool,
}

impl OutputChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_line(&mut self, line: &str) {
        info!(target: "czar::output", "{}", line);
        self.lines.push(line.to_string());
    }

    /// Like [`append_line`](Self::append_line), logged at error level.
    pub fn append_error(&mut self, line: &str) {
        error!(target: "czar::output", "{}", line);
        self.lines.push(line.to_string());
    }

    /// Bring the channel to the foreground.
    pub fn show(&mut self) {
        self.revealed = true;
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}
