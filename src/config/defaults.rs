//! Built-in commit types and prompt text.

use super::resolve::{CommitTypeDefinition, PromptMessages};

/// Footer prefix used when the config file does not set `footerPrefix`.
pub const DEFAULT_FOOTER_PREFIX: &str = "Closes ";

/// (value, name, emoji shortcode, glyph)
const DEFAULT_TYPES: [(&str, &str, &str, &str); 10] = [
    ("feat", "A new feature", ":sparkles:", "✨"),
    ("fix", "A bug fix", ":bug:", "🐛"),
    ("docs", "Documentation only changes", ":memo:", "📝"),
    (
        "style",
        "Changes that do not affect the meaning of the code (white-space, formatting, etc)",
        ":lipstick:",
        "💄",
    ),
    (
        "refactor",
        "A code change that neither fixes a bug nor adds a feature",
        ":recycle:",
        "♻️",
    ),
    ("perf", "A code change that improves performance", ":zap:", "⚡️"),
    (
        "test",
        "Adding missing tests or correcting existing tests",
        ":white_check_mark:",
        "✅",
    ),
    (
        "build",
        "Changes that affect the build system or external dependencies",
        ":package:",
        "📦",
    ),
    (
        "ci",
        "Changes to CI configuration files and scripts",
        ":green_heart:",
        "💚",
    ),
    (
        "chore",
        "Other changes that don't modify src or test files",
        ":wrench:",
        "🔧",
    ),
];

/// The ten built-in conventional commit types, in display order.
pub fn default_types() -> Vec<CommitTypeDefinition> {
    DEFAULT_TYPES
        .iter()
        .map(|(value, name, emoji, code)| CommitTypeDefinition {
            value: value.to_string(),
            name: name.to_string(),
            emoji: emoji.to_string(),
            code: code.to_string(),
        })
        .collect()
}

impl Default for PromptMessages {
    fn default() -> Self {
        Self {
            commit_type: "Select the type of change that you're committing".to_string(),
            custom_scope: "Denote the SCOPE of this change".to_string(),
            custom_scope_entry: "Custom scope...".to_string(),
            scope: "Denote the SCOPE of this change (optional)".to_string(),
            subject: "Write a SHORT, IMPERATIVE tense description of the change".to_string(),
            body: "Provide a LONGER description of the change (optional). Use \"|\" to break new line"
                .to_string(),
            breaking: "List any BREAKING CHANGES (optional)".to_string(),
            footer: "List any ISSUES CLOSED by this change (optional). E.g.: #31, #34".to_string(),
        }
    }
}
