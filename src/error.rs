//! Error types for czar modules using thiserror.

use std::error::Error as _;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading a wizard configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ParseFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors from running git for the commit step.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("git not found. Install git and make sure it is on your PATH")]
    GitNotInstalled,

    #[error("Failed to spawn git {operation}: {source}")]
    SpawnFailed {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("git {operation} exited with code {code}: {stderr}")]
    NonZeroExit {
        operation: String,
        code: i32,
        stderr: String,
    },
}

impl CommitError {
    /// Every message in the error's source chain, outermost first.
    ///
    /// Written to the output channel as diagnostic detail when a commit fails.
    pub fn detail(&self) -> Vec<String> {
        let mut lines = vec![self.to_string()];
        let mut source = self.source();
        while let Some(err) = source {
            lines.push(format!("caused by: {err}"));
            source = err.source();
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_includes_source_chain() {
        let err = CommitError::SpawnFailed {
            operation: "commit".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let detail = err.detail();
        assert_eq!(detail.len(), 2);
        assert!(detail[0].starts_with("Failed to spawn git commit"));
        assert_eq!(detail[1], "caused by: no such file");
    }

    #[test]
    fn test_detail_without_source() {
        let err = CommitError::NonZeroExit {
            operation: "commit".to_string(),
            code: 1,
            stderr: "nothing to commit".to_string(),
        };
        assert_eq!(
            err.detail(),
            vec!["git commit exited with code 1: nothing to commit".to_string()]
        );
    }
}
