//! The guided dialogue that collects a conventional commit message.
//!
//! Six steps run in a fixed order: type, scope, subject, body, breaking,
//! footer. Each step asks at most one question (scope may ask two when the
//! user picks the custom entry). Cancelling any prompt moves the wizard to
//! [`WizardStep::Cancelled`], after which every step call is a no-op.

use tracing::debug;

use crate::commit::message::render;
use crate::config::{EffectiveConfig, Question};

use super::prompt::{Choice, LengthRule, PromptPort};
use super::state::{AnswerSet, CommitAnswers, WizardStep};
use super::wrap::format_body;

/// One wizard session. Owns its answers until they are rendered.
pub struct ConventionalCommitMessage<'a, P: PromptPort + ?Sized> {
    config: &'a EffectiveConfig,
    prompt: &'a P,
    subject_rule: LengthRule,
    step: WizardStep,
    answers: AnswerSet,
}

impl<'a, P: PromptPort + ?Sized> ConventionalCommitMessage<'a, P> {
    pub fn new(config: &'a EffectiveConfig, subject_length: usize, prompt: &'a P) -> Self {
        Self {
            config,
            prompt,
            subject_rule: LengthRule::new(subject_length),
            step: WizardStep::Type,
            answers: AnswerSet::default(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Not cancelled, and both type and subject answered.
    pub fn is_complete(&self) -> bool {
        self.step != WizardStep::Cancelled
            && self.answers.commit_type.is_some()
            && self.answers.subject.is_some()
    }

    /// Run the step the wizard is currently at and return the new position.
    pub fn advance(&mut self) -> WizardStep {
        match self.step {
            WizardStep::Type => self.ask_type(),
            WizardStep::Scope => self.ask_scope(),
            WizardStep::Subject => self.ask_subject(),
            WizardStep::Body => self.ask_body(),
            WizardStep::Breaking => self.ask_breaking(),
            WizardStep::Footer => self.ask_footer(),
            WizardStep::Done | WizardStep::Cancelled => {}
        }
        self.step
    }

    /// Run every remaining step. Returns the answers if the session completed.
    pub fn run(mut self) -> Option<CommitAnswers> {
        while !self.step.is_terminal() {
            self.advance();
        }
        self.finish()
    }

    /// Consume the session. `None` when cancelled or incomplete.
    pub fn finish(self) -> Option<CommitAnswers> {
        if !self.is_complete() {
            debug!("Wizard ended at step '{}' without a message", self.step);
            return None;
        }
        self.answers.complete()
    }

    /// Run every remaining step and render the message, trimmed.
    /// `None` when the session was cancelled or is incomplete.
    pub fn into_message(self) -> Option<String> {
        let config = self.config;
        self.run()
            .map(|answers| render(&answers, config).trim().to_string())
    }

    pub fn ask_type(&mut self) {
        if self.step != WizardStep::Type {
            return;
        }
        let options: Vec<Choice> = self
            .config
            .types
            .iter()
            .map(|t| Choice::new(&t.value, Some(t.name.clone())))
            .collect();

        match self
            .prompt
            .choose_one(&self.config.messages.commit_type, &options)
        {
            Some(choice) => {
                self.answers.commit_type = Some(choice.label);
                self.complete_step();
            }
            None => self.cancel(),
        }
    }

    pub fn ask_scope(&mut self) {
        if self.step != WizardStep::Scope {
            return;
        }
        let config = self.config;
        let messages = &config.messages;

        if !config.scopes.is_empty() {
            let mut options: Vec<Choice> = config
                .scopes
                .iter()
                .map(|s| Choice::new(&s.name, None))
                .collect();
            if config.allow_custom_scopes {
                options.push(Choice::custom_entry(&messages.custom_scope_entry));
            }

            let scope = match self.prompt.choose_one(&messages.scope, &options) {
                Some(choice) if choice.custom_entry => {
                    self.prompt.ask_text(&messages.custom_scope, None)
                }
                Some(choice) => Some(choice.label),
                None => None,
            };
            self.store_or_cancel(scope, |answers, value| answers.scope = Some(value));
        } else if !config.skips(Question::Scope) {
            let scope = self.prompt.ask_text(&messages.scope, None);
            self.store_or_cancel(scope, |answers, value| answers.scope = Some(value));
        } else {
            self.skip(Question::Scope);
        }
    }

    pub fn ask_subject(&mut self) {
        if self.step != WizardStep::Subject {
            return;
        }
        let subject = self
            .prompt
            .ask_text(&self.config.messages.subject, Some(self.subject_rule));
        self.store_or_cancel(subject, |answers, value| answers.subject = Some(value));
    }

    pub fn ask_body(&mut self) {
        if self.step != WizardStep::Body {
            return;
        }
        if self.config.skips(Question::Body) {
            self.skip(Question::Body);
            return;
        }
        let body = self
            .prompt
            .ask_text(&self.config.messages.body, None)
            .map(|text| format_body(&text));
        self.store_or_cancel(body, |answers, value| answers.body = Some(value));
    }

    pub fn ask_breaking(&mut self) {
        if self.step != WizardStep::Breaking {
            return;
        }
        if self.config.skips(Question::Breaking) {
            self.skip(Question::Breaking);
            return;
        }
        let breaking = self.prompt.ask_text(&self.config.messages.breaking, None);
        self.store_or_cancel(breaking, |answers, value| answers.breaking = Some(value));
    }

    pub fn ask_footer(&mut self) {
        if self.step != WizardStep::Footer {
            return;
        }
        if self.config.skips(Question::Footer) {
            self.skip(Question::Footer);
            return;
        }
        let footer = self.prompt.ask_text(&self.config.messages.footer, None);
        self.store_or_cancel(footer, |answers, value| answers.footer = Some(value));
    }

    fn store_or_cancel<F>(&mut self, answer: Option<String>, store: F)
    where
        F: FnOnce(&mut AnswerSet, String),
    {
        match answer {
            Some(value) => {
                store(&mut self.answers, value);
                self.complete_step();
            }
            None => self.cancel(),
        }
    }

    fn skip(&mut self, question: Question) {
        debug!("Skipping '{}' question", question);
        self.complete_step();
    }

    fn complete_step(&mut self) {
        self.step = self.step.next();
    }

    fn cancel(&mut self) {
        debug!("Wizard cancelled at step '{}'", self.step);
        self.step = WizardStep::Cancelled;
    }
}
