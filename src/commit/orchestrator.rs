//! Committing a finished message: optional auto-staging, the commit itself,
//! post-commit refresh/sync, and the output visibility policy.

use std::path::Path;

use tracing::{debug, error, info};

use crate::config::Settings;
use crate::error::CommitError;

use super::executor::{CommandOutput, VcsPort, git_args};
use super::host::{Host, OutputChannel};

/// How a commit attempt ended. Failures are already reported when this is
/// returned; callers only need it to pick an exit status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed,
    Failed { message: String },
}

/// Commit `message` in `cwd`.
///
/// Never returns an error: any failure is shown through
/// [`Host::notify_error`] and written, with its source chain, to `output`.
pub async fn commit<V, H>(
    vcs: &V,
    host: &H,
    output: &mut OutputChannel,
    settings: &Settings,
    cwd: &Path,
    message: &str,
) -> CommitOutcome
where
    V: VcsPort + ?Sized,
    H: Host + ?Sized,
{
    match try_commit(vcs, host, output, settings, cwd, message).await {
        Ok(()) => CommitOutcome::Committed,
        Err(e) => {
            let text = e.to_string();
            error!("Commit failed: {}", text);
            host.notify_error(&text);
            for line in e.detail() {
                output.append_error(&line);
            }
            CommitOutcome::Failed { message: text }
        }
    }
}

async fn try_commit<V, H>(
    vcs: &V,
    host: &H,
    output: &mut OutputChannel,
    settings: &Settings,
    cwd: &Path,
    message: &str,
) -> Result<(), CommitError>
where
    V: VcsPort + ?Sized,
    H: Host + ?Sized,
{
    // 1. Smart commit: stage everything when nothing is staged
    if settings.smart_commit && !has_staged_files(vcs, cwd).await? {
        debug!("Nothing staged, staging all changes");
        host.stage_all(cwd).await?;
    }

    // 2. Commit
    let args = vec!["commit".to_string(), "-m".to_string(), message.to_string()];
    let result = vcs.run(&args, cwd).await?;

    // 3. Show output per visibility mode
    forward_output(output, &result);
    if settings.show_output_channel.reveals(result.exit_code) {
        output.show();
    }

    if !result.success() {
        return Err(CommitError::NonZeroExit {
            operation: "commit".to_string(),
            code: result.exit_code,
            stderr: result.stderr.trim().to_string(),
        });
    }
    info!("Committed in {}", cwd.display());

    // 4. Refresh, then sync when enabled
    host.refresh(cwd).await?;
    if settings.auto_sync {
        debug!("Auto sync enabled, synchronising with remote");
        host.sync(cwd).await?;
    }

    Ok(())
}

/// Whether the index holds any staged changes.
pub async fn has_staged_files<V: VcsPort + ?Sized>(
    vcs: &V,
    cwd: &Path,
) -> Result<bool, CommitError> {
    let result = vcs
        .run(&git_args(&["diff", "--name-only", "--cached"]), cwd)
        .await?;
    if !result.success() {
        return Err(CommitError::NonZeroExit {
            operation: "diff".to_string(),
            code: result.exit_code,
            stderr: result.stderr.trim().to_string(),
        });
    }
    Ok(!result.stdout.trim().is_empty())
}

fn forward_output(output: &mut OutputChannel, result: &CommandOutput) {
    if result.stdout.is_empty() {
        return;
    }
    for line in result.stdout.lines() {
        output.append_line(line);
    }
}
