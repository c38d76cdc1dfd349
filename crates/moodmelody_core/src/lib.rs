//! Core domain logic for Mood Melody.
//! This crate is the single source of truth for melody invariants; host
//! crates only translate user intents into session events.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod session;

pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::draft::Draft;
pub use model::melody::{DraftField, Melody, MelodyId, ValidationError};
pub use model::text::{is_blank, is_form_whitespace};
pub use repo::melody_store::{InMemoryMelodyStore, MelodyStore};
pub use service::clock::{Clock, FixedClock, LocalClock, DEFAULT_TIMESTAMP_FORMAT};
pub use service::composer::compose_melody;
pub use service::tag_normalizer::normalize_tags;
pub use session::{
    ClearOutcome, ConfirmPrompt, EventOutcome, Session, SessionEvent, CLEAR_ALL_CONFIRM_MESSAGE,
    EMPTY_STORE_MESSAGE,
};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
