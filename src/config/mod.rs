//! Wizard configuration: built-in defaults, config file loading, and settings.

pub mod defaults;
pub mod file;
pub mod resolve;
pub mod settings;

pub use file::{CzConfig, MessageOverrides, find_config_file, load_config};
pub use resolve::{CommitTypeDefinition, EffectiveConfig, PromptMessages, Question, ScopeDefinition, resolve};
pub use settings::{OutputVisibility, Settings};
