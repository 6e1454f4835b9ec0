//! Commit settings read from the environment and overridden by CLI flags.

use std::env;
use std::fmt;

use tracing::warn;

/// Environment variable enabling a pull + push after every successful commit.
pub const AUTO_SYNC_ENV_VAR: &str = "CZAR_AUTO_SYNC";
/// Environment variable for the maximum subject length.
pub const SUBJECT_LENGTH_ENV_VAR: &str = "CZAR_SUBJECT_LENGTH";
/// Environment variable for the output visibility mode.
pub const SHOW_OUTPUT_ENV_VAR: &str = "CZAR_SHOW_OUTPUT_CHANNEL";
/// Environment variable enabling smart commit (stage everything when nothing is staged).
pub const SMART_COMMIT_ENV_VAR: &str = "CZAR_SMART_COMMIT";

/// Default maximum subject length.
pub const DEFAULT_SUBJECT_LENGTH: usize = 50;

/// When git's output is shown to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputVisibility {
    #[default]
    Off,
    Always,
    OnError,
}

impl OutputVisibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputVisibility::Off => "off",
            OutputVisibility::Always => "always",
            OutputVisibility::OnError => "onError",
        }
    }

    /// Whether the output should be revealed for a command with this exit code.
    pub fn reveals(&self, exit_code: i32) -> bool {
        match self {
            OutputVisibility::Off => false,
            OutputVisibility::Always => true,
            OutputVisibility::OnError => exit_code != 0,
        }
    }
}

impl fmt::Display for OutputVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OutputVisibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(Self::Off),
            "always" => Ok(Self::Always),
            "onError" => Ok(Self::OnError),
            _ => Err(format!(
                "Unknown output visibility '{}' (expected off, always or onError)",
                s
            )),
        }
    }
}

/// Options consumed by the wizard and the commit step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub auto_sync: bool,
    pub subject_length: usize,
    pub show_output_channel: OutputVisibility,
    pub smart_commit: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_sync: false,
            subject_length: DEFAULT_SUBJECT_LENGTH,
            show_output_channel: OutputVisibility::Off,
            smart_commit: false,
        }
    }
}

impl Settings {
    /// Read settings from `CZAR_*` environment variables.
    ///
    /// Unset variables keep the default. Invalid values log a warning and
    /// keep the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            auto_sync: env_parse(AUTO_SYNC_ENV_VAR, parse_bool, defaults.auto_sync),
            subject_length: env_parse(
                SUBJECT_LENGTH_ENV_VAR,
                |v| v.parse::<usize>().ok().filter(|n| *n > 0),
                defaults.subject_length,
            ),
            show_output_channel: env_parse(
                SHOW_OUTPUT_ENV_VAR,
                |v| v.parse().ok(),
                defaults.show_output_channel,
            ),
            smart_commit: env_parse(SMART_COMMIT_ENV_VAR, parse_bool, defaults.smart_commit),
        }
    }
}

fn env_parse<T, F>(name: &str, parse: F, default: T) -> T
where
    T: fmt::Debug,
    F: FnOnce(&str) -> Option<T>,
{
    match env::var(name) {
        Ok(v) if !v.is_empty() => match parse(&v) {
            Some(value) => value,
            None => {
                warn!("Invalid {} value '{}', using default {:?}", name, v, default);
                default
            }
        },
        _ => default,
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ALL_VARS: [&str; 4] = [
        AUTO_SYNC_ENV_VAR,
        SUBJECT_LENGTH_ENV_VAR,
        SHOW_OUTPUT_ENV_VAR,
        SMART_COMMIT_ENV_VAR,
    ];

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        temp_env::with_vars_unset(ALL_VARS, || {
            assert_eq!(Settings::from_env(), Settings::default());
        });
    }

    #[test]
    #[serial]
    fn test_from_env_reads_all_values() {
        temp_env::with_vars(
            [
                (AUTO_SYNC_ENV_VAR, Some("true")),
                (SUBJECT_LENGTH_ENV_VAR, Some("72")),
                (SHOW_OUTPUT_ENV_VAR, Some("onError")),
                (SMART_COMMIT_ENV_VAR, Some("1")),
            ],
            || {
                let settings = Settings::from_env();
                assert!(settings.auto_sync);
                assert_eq!(settings.subject_length, 72);
                assert_eq!(settings.show_output_channel, OutputVisibility::OnError);
                assert!(settings.smart_commit);
            },
        );
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_values_use_defaults() {
        temp_env::with_vars(
            [
                (AUTO_SYNC_ENV_VAR, Some("maybe")),
                (SUBJECT_LENGTH_ENV_VAR, Some("-3")),
                (SHOW_OUTPUT_ENV_VAR, Some("sometimes")),
                (SMART_COMMIT_ENV_VAR, Some("")),
            ],
            || {
                assert_eq!(Settings::from_env(), Settings::default());
            },
        );
    }

    #[test]
    #[serial]
    fn test_from_env_zero_subject_length_is_invalid() {
        temp_env::with_var(SUBJECT_LENGTH_ENV_VAR, Some("0"), || {
            assert_eq!(Settings::from_env().subject_length, DEFAULT_SUBJECT_LENGTH);
        });
    }

    #[test]
    fn test_visibility_reveals() {
        assert!(!OutputVisibility::Off.reveals(0));
        assert!(!OutputVisibility::Off.reveals(1));
        assert!(OutputVisibility::Always.reveals(0));
        assert!(OutputVisibility::Always.reveals(128));
        assert!(!OutputVisibility::OnError.reveals(0));
        assert!(OutputVisibility::OnError.reveals(1));
    }

    #[test]
    fn test_visibility_from_str() {
        assert_eq!("off".parse(), Ok(OutputVisibility::Off));
        assert_eq!("always".parse(), Ok(OutputVisibility::Always));
        assert_eq!("onError".parse(), Ok(OutputVisibility::OnError));
        assert!("onerror".parse::<OutputVisibility>().is_err());
    }
}
