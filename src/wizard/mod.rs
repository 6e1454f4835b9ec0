//! Interactive wizard that collects the parts of a conventional commit.

pub mod controller;
pub mod prompt;
pub mod state;
pub mod wrap;

pub use controller::ConventionalCommitMessage;
pub use prompt::{Choice, LengthRule, PromptPort, TerminalPrompt};
pub use state::{AnswerSet, CommitAnswers, WizardStep};
pub use wrap::{BODY_WIDTH, format_body};
