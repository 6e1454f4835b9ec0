//! Rendering the commit message and running the commit.

pub mod executor;
pub mod host;
pub mod message;
pub mod orchestrator;

pub use executor::{CommandOutput, GitExecutor, VcsPort, check_git_installed};
pub use host::{GitHost, Host, OutputChannel};
pub use message::render;
pub use orchestrator::{CommitOutcome, commit, has_staged_files};
