//! czar - CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use czar::commit::{CommitOutcome, GitExecutor, GitHost, OutputChannel, check_git_installed, commit};
use czar::config::{OutputVisibility, Settings, find_config_file, load_config, resolve};
use czar::wizard::{ConventionalCommitMessage, TerminalPrompt};

/// Write a conventional commit message step by step and commit it.
#[derive(Parser, Debug)]
#[command(name = "czar")]
#[command(about = "Write a conventional commit message step by step and commit it")]
#[command(version)]
struct Cli {
    /// Repository working directory
    #[arg(long, default_value = ".")]
    cwd: PathBuf,

    /// Wizard config file (skips .cz-config.json discovery)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pull and push after a successful commit
    #[arg(long)]
    auto_sync: bool,

    /// Stage all changes when nothing is staged
    #[arg(long)]
    smart_commit: bool,

    /// Maximum subject length
    #[arg(long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    subject_length: Option<usize>,

    /// When to show git output: off, always, onError
    #[arg(long)]
    show_output: Option<OutputVisibility>,

    /// Print the message instead of committing
    #[arg(long)]
    dry_run: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let mut cli = Cli::parse();
    init_tracing(cli.verbose);

    cli.cwd = cli
        .cwd
        .canonicalize()
        .with_context(|| format!("Working directory {} not found", cli.cwd.display()))?;

    // Step 1: Check prerequisites
    if !cli.dry_run {
        check_git_installed().context("git is required")?;
    }

    // Step 2: Resolve settings and wizard config
    let settings = apply_flags(Settings::from_env(), &cli);
    debug!("Settings: {:?}", settings);

    let config_path = match &cli.config {
        Some(path) => Some(path.clone()),
        None => find_config_file(&cli.cwd),
    };
    let external = config_path
        .as_deref()
        .map(load_config)
        .transpose()
        .context("Failed to load wizard config")?;
    let config = resolve(external.as_ref());

    // Step 3: Run the wizard
    let prompt = TerminalPrompt::new();
    let wizard = ConventionalCommitMessage::new(&config, settings.subject_length, &prompt);
    let Some(message) = wizard.into_message() else {
        debug!("Wizard cancelled, nothing to commit");
        return Ok(ExitCode::SUCCESS);
    };

    // Step 4: Commit or preview
    if cli.dry_run {
        println!("{}", message);
        return Ok(ExitCode::SUCCESS);
    }

    let vcs = Arc::new(GitExecutor::new());
    let host = GitHost::new(Arc::clone(&vcs));
    let mut output = OutputChannel::new();

    let outcome = commit(vcs.as_ref(), &host, &mut output, &settings, &cli.cwd, &message).await;

    if output.is_revealed() {
        for line in output.lines() {
            println!("{}", line);
        }
    }

    match outcome {
        CommitOutcome::Committed => {
            println!("✓ Committed");
            Ok(ExitCode::SUCCESS)
        }
        CommitOutcome::Failed { .. } => Ok(ExitCode::FAILURE),
    }
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// CLI flags override values from the environment.
fn apply_flags(mut settings: Settings, cli: &Cli) -> Settings {
    if cli.auto_sync {
        settings.auto_sync = true;
    }
    if cli.smart_commit {
        settings.smart_commit = true;
    }
    if let Some(length) = cli.subject_length {
        settings.subject_length = length;
    }
    if let Some(visibility) = cli.show_output {
        settings.show_output_channel = visibility;
    }
    settings
}
