//! Rendering collected answers into a commit message.

use crate::config::EffectiveConfig;
use crate::wizard::CommitAnswers;

/// Render the answers as a conventional commit message.
///
/// Produces:
/// ```text
/// type(scope): <glyph> subject
///
/// body
///
/// BREAKING CHANGE: breaking
/// <footer prefix>footer
/// ```
///
/// The body paragraph is always emitted, so a message without a body
/// carries an empty paragraph between the header and the trailers. The
/// result is not trimmed; callers trim before committing.
pub fn render(answers: &CommitAnswers, config: &EffectiveConfig) -> String {
    let code = config.code_for(&answers.commit_type);

    let mut message = answers.commit_type.clone();
    if let Some(scope) = non_empty(&answers.scope) {
        message.push_str(&format!("({scope})"));
    }
    message.push_str(&format!(": {code} {}", answers.subject));

    message.push_str("\n\n");
    message.push_str(answers.body.as_deref().unwrap_or(""));
    message.push_str("\n\n");

    if let Some(breaking) = non_empty(&answers.breaking) {
        message.push_str(&format!("BREAKING CHANGE: {breaking}\n"));
    }
    if let Some(footer) = non_empty(&answers.footer) {
        message.push_str(&config.footer_prefix);
        message.push_str(footer);
    }

    message
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
