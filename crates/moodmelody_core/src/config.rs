//! Host-facing configuration.
//!
//! # Responsibility
//! - Resolve log level, log directory and timestamp pattern from an
//!   environment-style lookup.
//!
//! # Invariants
//! - Blank values are treated as unset.
//! - A resolved config always holds a supported level and a renderable
//!   timestamp pattern.

use crate::logging::{default_log_level, normalize_level};
use crate::service::clock::{validate_timestamp_format, LocalClock, DEFAULT_TIMESTAMP_FORMAT};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_LOG_LEVEL: &str = "MOODMELODY_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "MOODMELODY_LOG_DIR";
pub const ENV_TIMESTAMP_FORMAT: &str = "MOODMELODY_TIMESTAMP_FORMAT";

/// Configuration resolution error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Log level is not one of `trace|debug|info|warn|error`.
    InvalidLogLevel(String),
    /// Log directory must be absolute.
    RelativeLogDir(PathBuf),
    /// Timestamp pattern contains an unknown specifier.
    InvalidTimestampFormat(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel(message) => write!(f, "{message}"),
            Self::RelativeLogDir(path) => write!(
                f,
                "{ENV_LOG_DIR} must be an absolute path, got `{}`",
                path.display()
            ),
            Self::InvalidTimestampFormat(value) => {
                write!(f, "invalid {ENV_TIMESTAMP_FORMAT} pattern `{value}`")
            }
        }
    }
}

impl Error for ConfigError {}

/// Resolved core configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub log_level: &'static str,
    /// Logging stays off when `None`.
    pub log_dir: Option<PathBuf>,
    pub timestamp_format: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: None,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl CoreConfig {
    /// Resolves configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let mut config = Self::default();

        if let Some(level) = read(ENV_LOG_LEVEL) {
            config.log_level = normalize_level(&level).map_err(ConfigError::InvalidLogLevel)?;
        }

        if let Some(dir) = read(ENV_LOG_DIR) {
            let path = PathBuf::from(dir);
            if !path.is_absolute() {
                return Err(ConfigError::RelativeLogDir(path));
            }
            config.log_dir = Some(path);
        }

        if let Some(format) = read(ENV_TIMESTAMP_FORMAT) {
            validate_timestamp_format(&format)?;
            config.timestamp_format = format;
        }

        Ok(config)
    }

    /// Clock stamping melodies with the configured pattern.
    ///
    /// # Errors
    /// - `ConfigError::InvalidTimestampFormat` when `timestamp_format` was
    ///   replaced with an unrenderable pattern after resolution.
    pub fn clock(&self) -> Result<LocalClock, ConfigError> {
        LocalClock::new(self.timestamp_format.as_str())
    }
}
