//! Creation timestamp sources.
//!
//! # Invariants
//! - A `LocalClock` only holds patterns chrono can render, so `now_label`
//!   never fails.

use crate::config::ConfigError;
use chrono::format::{Item, StrftimeItems};
use chrono::Local;

/// Default `created_at` pattern: `2026/10/19 9:05:03`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y/%-m/%-d %-H:%M:%S";

/// Produces the human-readable timestamp stamped on new melodies.
pub trait Clock {
    fn now_label(&self) -> String;
}

/// Local wall-clock time rendered with a strftime pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalClock {
    format: String,
}

impl LocalClock {
    /// Creates a clock rendering with `format`.
    ///
    /// # Errors
    /// - `ConfigError::InvalidTimestampFormat` when the pattern has an unknown
    ///   or dangling specifier.
    pub fn new(format: impl Into<String>) -> Result<Self, ConfigError> {
        let format = format.into();
        validate_timestamp_format(&format)?;
        Ok(Self { format })
    }

    pub fn format(&self) -> &str {
        &self.format
    }
}

impl Default for LocalClock {
    fn default() -> Self {
        Self {
            format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl Clock for LocalClock {
    fn now_label(&self) -> String {
        Local::now().format(&self.format).to_string()
    }
}

/// Clock that always returns the same label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedClock(pub String);

impl Clock for FixedClock {
    fn now_label(&self) -> String {
        self.0.clone()
    }
}

pub(crate) fn validate_timestamp_format(format: &str) -> Result<(), ConfigError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::InvalidTimestampFormat(format.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Clock, FixedClock, LocalClock, DEFAULT_TIMESTAMP_FORMAT};
    use crate::config::ConfigError;

    #[test]
    fn local_clock_default_pattern_has_date_and_time_parts() {
        let clock = LocalClock::default();
        assert_eq!(clock.format(), DEFAULT_TIMESTAMP_FORMAT);
        assert_eq!(LocalClock::new(DEFAULT_TIMESTAMP_FORMAT).unwrap(), clock);
        let label = clock.now_label();
        assert_eq!(label.matches('/').count(), 2, "unexpected label: {label}");
        assert_eq!(label.matches(':').count(), 2, "unexpected label: {label}");
    }

    #[test]
    fn local_clock_honors_custom_pattern() {
        let label = LocalClock::new("%Y").unwrap().now_label();
        assert_eq!(label.len(), 4);
        assert!(label.chars().all(|ch| ch.is_ascii_digit()));
    }

    #[test]
    fn local_clock_rejects_unrenderable_patterns() {
        for pattern in ["%Q", "%Y/%m %Q"] {
            let err = LocalClock::new(pattern).unwrap_err();
            assert_eq!(err, ConfigError::InvalidTimestampFormat(pattern.to_string()));
        }
    }

    #[test]
    fn fixed_clock_repeats_label() {
        let clock = FixedClock("2026/1/1 0:00:00".to_string());
        assert_eq!(clock.now_label(), clock.now_label());
    }
}
