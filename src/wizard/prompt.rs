//! The two prompt primitives the wizard needs, and a terminal implementation.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use tracing::{debug, warn};

/// One option of a single-choice prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub description: Option<String>,
    /// Marks the trailing "type your own" entry of a list.
    pub custom_entry: bool,
}

impl Choice {
    pub fn new(label: impl Into<String>, description: Option<String>) -> Self {
        Self {
            label: label.into(),
            description,
            custom_entry: false,
        }
    }

    pub fn custom_entry(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: None,
            custom_entry: true,
        }
    }

    fn display(&self) -> String {
        match &self.description {
            Some(description) if !description.is_empty() => {
                format!("{}: {}", self.label, description)
            }
            _ => self.label.clone(),
        }
    }
}

/// Length constraint for free-text answers, counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRule {
    pub max: usize,
}

impl LengthRule {
    pub fn new(max: usize) -> Self {
        Self { max }
    }

    /// `Ok` for acceptable input, otherwise the message to show at the prompt.
    pub fn check(&self, input: &str) -> Result<(), String> {
        let len = input.chars().count();
        if len == 0 || len > self.max {
            return Err(format!(
                "Subject is required and must be at most {} characters",
                self.max
            ));
        }
        Ok(())
    }
}

/// Interactive prompts. `None` means the user cancelled.
///
/// The wizard never sees I/O failures: implementations report them as
/// cancellation.
pub trait PromptPort {
    /// Ask the user to pick one of `options`.
    fn choose_one(&self, question: &str, options: &[Choice]) -> Option<Choice>;

    /// Ask for free text. When `rule` is given, invalid input is rejected and
    /// re-prompted until it passes or the user cancels.
    fn ask_text(&self, question: &str, rule: Option<LengthRule>) -> Option<String>;
}

/// Prompts on the controlling terminal via dialoguer.
pub struct TerminalPrompt {
    theme: ColorfulTheme,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptPort for TerminalPrompt {
    fn choose_one(&self, question: &str, options: &[Choice]) -> Option<Choice> {
        let items: Vec<String> = options.iter().map(Choice::display).collect();
        let selection = Select::with_theme(&self.theme)
            .with_prompt(question)
            .items(&items)
            .default(0)
            .interact_opt();

        match selection {
            Ok(Some(index)) => options.get(index).cloned(),
            Ok(None) => {
                debug!("Selection cancelled: {}", question);
                None
            }
            Err(e) => {
                warn!("Prompt failed, treating as cancelled: {}", e);
                None
            }
        }
    }

    fn ask_text(&self, question: &str, rule: Option<LengthRule>) -> Option<String> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(question)
            .allow_empty(true);

        if let Some(rule) = rule {
            input = input.validate_with(move |value: &String| rule.check(value));
        }

        match input.interact_text() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Prompt failed, treating as cancelled: {}", e);
                None
            }
        }
    }
}
