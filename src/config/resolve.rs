//! Merge a sparse wizard configuration with the built-in defaults.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::defaults::{DEFAULT_FOOTER_PREFIX, default_types};
use super::file::{CzConfig, MessageOverrides};

/// A selectable commit type such as `feat` or `fix`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitTypeDefinition {
    /// Unique key written into the header.
    pub value: String,
    /// Human readable description shown next to the value.
    pub name: String,
    /// Gitmoji shortcode, e.g. `:sparkles:`.
    #[serde(default)]
    pub emoji: String,
    /// Glyph written into the header after the colon.
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeDefinition {
    #[serde(default)]
    pub name: String,
}

/// Question text for every prompt the wizard can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptMessages {
    pub commit_type: String,
    pub custom_scope: String,
    pub custom_scope_entry: String,
    pub scope: String,
    pub subject: String,
    pub body: String,
    pub breaking: String,
    pub footer: String,
}

impl PromptMessages {
    /// Apply overrides key by key. Keys left unset keep their current text.
    pub fn merged(mut self, overrides: &MessageOverrides) -> Self {
        let fields = [
            (&mut self.commit_type, &overrides.commit_type),
            (&mut self.custom_scope, &overrides.custom_scope),
            (&mut self.custom_scope_entry, &overrides.custom_scope_entry),
            (&mut self.scope, &overrides.scope),
            (&mut self.subject, &overrides.subject),
            (&mut self.body, &overrides.body),
            (&mut self.breaking, &overrides.breaking),
            (&mut self.footer, &overrides.footer),
        ];
        for (target, value) in fields {
            if let Some(text) = value {
                *target = text.clone();
            }
        }
        self
    }
}

/// Wizard questions that can appear in the skip-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Question {
    Type,
    Scope,
    Subject,
    Body,
    Breaking,
    Footer,
}

impl Question {
    pub fn as_str(&self) -> &'static str {
        match self {
            Question::Type => "type",
            Question::Scope => "scope",
            Question::Subject => "subject",
            Question::Body => "body",
            Question::Breaking => "breaking",
            Question::Footer => "footer",
        }
    }

    /// Whether the skip-list is allowed to remove this question.
    pub fn is_skippable(&self) -> bool {
        !matches!(self, Question::Type | Question::Subject)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Question {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "type" => Ok(Self::Type),
            "scope" => Ok(Self::Scope),
            "subject" => Ok(Self::Subject),
            "body" => Ok(Self::Body),
            "breaking" => Ok(Self::Breaking),
            "footer" => Ok(Self::Footer),
            _ => Err(format!("Unknown question: {}", s)),
        }
    }
}

/// Fully-populated wizard configuration for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveConfig {
    /// Never empty.
    pub types: Vec<CommitTypeDefinition>,
    pub scopes: Vec<ScopeDefinition>,
    pub messages: PromptMessages,
    pub allow_custom_scopes: bool,
    pub footer_prefix: String,
    pub skip_questions: BTreeSet<Question>,
}

impl EffectiveConfig {
    pub fn skips(&self, question: Question) -> bool {
        self.skip_questions.contains(&question)
    }

    /// Glyph for a commit type, or an empty string for unknown types.
    pub fn code_for(&self, commit_type: &str) -> &str {
        self.types
            .iter()
            .find(|t| t.value == commit_type)
            .map(|t| t.code.as_str())
            .unwrap_or("")
    }
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        resolve(None)
    }
}

/// Resolve the effective configuration. Total: never fails.
pub fn resolve(external: Option<&CzConfig>) -> EffectiveConfig {
    let Some(external) = external else {
        return EffectiveConfig {
            types: default_types(),
            scopes: Vec::new(),
            messages: PromptMessages::default(),
            allow_custom_scopes: false,
            footer_prefix: DEFAULT_FOOTER_PREFIX.to_string(),
            skip_questions: BTreeSet::new(),
        };
    };

    let types = match &external.types {
        Some(types) if !types.is_empty() => types.clone(),
        Some(_) => {
            debug!("Config file lists no commit types, using defaults");
            default_types()
        }
        None => default_types(),
    };

    let messages = match &external.messages {
        Some(overrides) => PromptMessages::default().merged(overrides),
        None => PromptMessages::default(),
    };

    EffectiveConfig {
        types,
        scopes: external.scopes.clone().unwrap_or_default(),
        messages,
        allow_custom_scopes: external.allow_custom_scopes.unwrap_or(false),
        footer_prefix: external
            .footer_prefix
            .clone()
            .unwrap_or_else(|| DEFAULT_FOOTER_PREFIX.to_string()),
        skip_questions: parse_skip_list(external.skip_questions.as_deref().unwrap_or(&[])),
    }
}

fn parse_skip_list(names: &[String]) -> BTreeSet<Question> {
    let mut skipped = BTreeSet::new();
    for name in names {
        match name.parse::<Question>() {
            Ok(question) if question.is_skippable() => {
                skipped.insert(question);
            }
            Ok(question) => {
                warn!("'{}' cannot be skipped, ignoring it in skipQuestions", question);
            }
            Err(e) => warn!("{}, ignoring it in skipQuestions", e),
        }
    }
    skipped
}
