//! Wizard steps and the answers collected along the way.

use std::fmt;

/// Position of the wizard in its linear sequence.
///
/// `Done` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Type,
    Scope,
    Subject,
    Body,
    Breaking,
    Footer,
    Done,
    Cancelled,
}

impl WizardStep {
    /// The step that follows this one when it completes normally.
    pub fn next(self) -> Self {
        match self {
            WizardStep::Type => WizardStep::Scope,
            WizardStep::Scope => WizardStep::Subject,
            WizardStep::Subject => WizardStep::Body,
            WizardStep::Body => WizardStep::Breaking,
            WizardStep::Breaking => WizardStep::Footer,
            WizardStep::Footer => WizardStep::Done,
            WizardStep::Done => WizardStep::Done,
            WizardStep::Cancelled => WizardStep::Cancelled,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, WizardStep::Done | WizardStep::Cancelled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStep::Type => "type",
            WizardStep::Scope => "scope",
            WizardStep::Subject => "subject",
            WizardStep::Body => "body",
            WizardStep::Breaking => "breaking",
            WizardStep::Footer => "footer",
            WizardStep::Done => "done",
            WizardStep::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answers collected so far. Each field is written at most once, in step order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    pub commit_type: Option<String>,
    pub scope: Option<String>,
    pub subject: Option<String>,
    pub body: Option<String>,
    pub breaking: Option<String>,
    pub footer: Option<String>,
}

impl AnswerSet {
    /// The answers in renderable form, if both type and subject are set.
    pub fn complete(self) -> Option<CommitAnswers> {
        Some(CommitAnswers {
            commit_type: self.commit_type?,
            subject: self.subject?,
            scope: self.scope,
            body: self.body,
            breaking: self.breaking,
            footer: self.footer,
        })
    }
}

/// A finished answer set: type and subject are always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitAnswers {
    pub commit_type: String,
    pub subject: String,
    pub scope: Option<String>,
    pub body: Option<String>,
    pub breaking: Option<String>,
    pub footer: Option<String>,
}

impl CommitAnswers {
    pub fn new(commit_type: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            commit_type: commit_type.into(),
            subject: subject.into(),
            scope: None,
            body: None,
            breaking: None,
            footer: None,
        }
    }
}
