//! Discovery and loading of `.cz-config.json` wizard configuration files.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;

use super::resolve::{CommitTypeDefinition, ScopeDefinition};

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".cz-config.json";

/// A wizard configuration file as written by the user. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CzConfig {
    pub types: Option<Vec<CommitTypeDefinition>>,
    pub scopes: Option<Vec<ScopeDefinition>>,
    pub messages: Option<MessageOverrides>,
    pub allow_custom_scopes: Option<bool>,
    /// Accepted for compatibility with cz-customizable configs; not used.
    pub allow_breaking_changes: Option<Vec<String>>,
    pub footer_prefix: Option<String>,
    pub skip_questions: Option<Vec<String>>,
}

/// Per-question prompt text overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageOverrides {
    #[serde(rename = "type")]
    pub commit_type: Option<String>,
    pub custom_scope: Option<String>,
    pub custom_scope_entry: Option<String>,
    pub scope: Option<String>,
    pub subject: Option<String>,
    pub body: Option<String>,
    pub breaking: Option<String>,
    pub footer: Option<String>,
}

#[derive(Deserialize)]
struct PackageJson {
    config: Option<PackageConfig>,
}

#[derive(Deserialize)]
struct PackageConfig {
    #[serde(rename = "cz-customizable")]
    cz_customizable: Option<CzCustomizable>,
}

#[derive(Deserialize)]
struct CzCustomizable {
    config: Option<String>,
}

/// Find the wizard configuration file for a working directory.
///
/// Walks from `start` up to the repository root (the first directory that
/// contains `.git`). In each directory a `.cz-config.json` wins over a
/// `package.json` pointing at one via `config.cz-customizable.config`.
/// A relative `start` is resolved against the current directory first.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let start = match start.canonicalize() {
        Ok(path) => path,
        Err(e) => {
            debug!("Cannot resolve {}: {}", start.display(), e);
            start.to_path_buf()
        }
    };
    for dir in start.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            debug!("Using wizard config {}", candidate.display());
            return Some(candidate);
        }

        if let Some(path) = config_from_package_json(dir) {
            debug!("Using wizard config {} from package.json", path.display());
            return Some(path);
        }

        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

fn config_from_package_json(dir: &Path) -> Option<PathBuf> {
    let content = std::fs::read_to_string(dir.join("package.json")).ok()?;
    let package: PackageJson = match serde_json::from_str(&content) {
        Ok(package) => package,
        Err(e) => {
            debug!("Ignoring unparsable package.json in {}: {}", dir.display(), e);
            return None;
        }
    };
    let relative = package.config?.cz_customizable?.config?;
    let path = dir.join(relative);
    path.is_file().then_some(path)
}

/// Read and parse a wizard configuration file.
pub fn load_config(path: &Path) -> Result<CzConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::ParseFailed {
        path: path.to_path_buf(),
        source,
    })
}
