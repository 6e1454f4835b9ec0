//! czar - A CLI tool that walks you through writing a conventional commit message.
//!
//! # Overview
//!
//! czar asks for the type, scope, subject, body, breaking change and closed
//! issues of a change, renders them as a Conventional Commit message, and
//! commits it with git. Types, scopes, prompt text and skipped questions come
//! from an optional `.cz-config.json`.

pub mod commit;
pub mod config;
pub mod error;
pub mod wizard;

// Re-export commonly used types
pub use commit::{CommitOutcome, OutputChannel, render};
pub use config::{EffectiveConfig, OutputVisibility, Settings};
pub use error::{CommitError, ConfigError};
pub use wizard::{AnswerSet, CommitAnswers, ConventionalCommitMessage, PromptPort, WizardStep};
