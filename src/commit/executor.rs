//! Running git for the commit step.
//!
//! All operations shell out to the system `git` binary, inheriting the user's
//! existing git config, hooks, SSH agent and credential store.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::CommitError;

/// Exit status and captured output of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Trait for running version-control commands.
///
/// This abstraction allows mocking the git subprocess in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VcsPort: Send + Sync {
    /// Run the VCS with `args` in `cwd`. A non-zero exit is not an error here;
    /// only a failure to launch the process is.
    async fn run(&self, args: &[String], cwd: &Path) -> Result<CommandOutput, CommitError>;
}

/// Executor that calls the real git binary.
pub struct GitExecutor {
    program: PathBuf,
}

impl GitExecutor {
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("git"),
        }
    }

    /// Use a specific git binary instead of the one on `PATH`.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GitExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VcsPort for GitExecutor {
    async fn run(&self, args: &[String], cwd: &Path) -> Result<CommandOutput, CommitError> {
        let operation = args.first().cloned().unwrap_or_default();
        debug!("Running git {} in {}", operation, cwd.display());

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| CommitError::SpawnFailed { operation, source })?;

        Ok(CommandOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Check that git is installed and on `PATH`.
pub fn check_git_installed() -> Result<(), CommitError> {
    which::which("git")
        .map(|_| ())
        .map_err(|_| CommitError::GitNotInstalled)
}

/// Build an owned argument list from string literals.
pub fn git_args(args: &[&str]) -> Vec<String> {
    args.iter().map(|a| a.to_string()).collect()
}

/// Run a git command and turn a non-zero exit into an error.
pub async fn run_checked<V: VcsPort + ?Sized>(
    vcs: &V,
    args: &[&str],
    cwd: &Path,
) -> Result<CommandOutput, CommitError> {
    let output = vcs.run(&git_args(args), cwd).await?;
    if !output.success() {
        return Err(CommitError::NonZeroExit {
            operation: args.first().copied().unwrap_or_default().to_string(),
            code: output.exit_code,
            stderr: output.stderr.trim().to_string(),
        });
    }
    Ok(output)
}
