//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose draft edits, save, list and clear-all to Dart via FRB.
//! - Own the one process-wide session the Flutter shell mounts.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - The Dart side asks the user before calling `melody_clear_all`; the answer
//!   arrives as `confirmed`.
//! - Melodies are returned newest first.

use log::warn;
use moodmelody_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    ClearOutcome, CoreConfig, InMemoryMelodyStore, LocalClock, Melody, Session,
};
use std::sync::{Mutex, MutexGuard, OnceLock};

static SESSION: OnceLock<Mutex<Session<InMemoryMelodyStore>>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Current draft values as last set by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftView {
    pub title: String,
    pub content: String,
    pub tags_raw: String,
}

/// One saved melody in list form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MelodyItem {
    /// Stable melody ID in string form.
    pub melody_id: String,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub created_at: String,
}

/// Envelope for save and clear actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MelodyActionResponse {
    /// Whether the store changed.
    pub ok: bool,
    /// Saved melody ID, set only by a successful save.
    pub melody_id: Option<String>,
    /// Human-readable message suitable for a UI notice.
    pub message: String,
}

impl MelodyActionResponse {
    fn success(message: impl Into<String>, melody_id: Option<String>) -> Self {
        Self {
            ok: true,
            melody_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            melody_id: None,
            message: message.into(),
        }
    }
}

/// Replaces the draft title verbatim.
#[flutter_rust_bridge::frb(sync)]
pub fn melody_set_title(value: String) {
    lock_session().set_title(value);
}

/// Replaces the draft content verbatim.
#[flutter_rust_bridge::frb(sync)]
pub fn melody_set_content(value: String) {
    lock_session().set_content(value);
}

/// Replaces the raw tag text verbatim.
#[flutter_rust_bridge::frb(sync)]
pub fn melody_set_tags(value: String) {
    lock_session().set_tags_raw(value);
}

/// Returns the current draft.
#[flutter_rust_bridge::frb(sync)]
pub fn melody_draft() -> DraftView {
    let session = lock_session();
    let draft = session.draft();
    DraftView {
        title: draft.title.clone(),
        content: draft.content.clone(),
        tags_raw: draft.tags_raw.clone(),
    }
}

/// Saves the current draft.
///
/// # FFI contract
/// - On success the draft is reset and `melody_id` is set.
/// - On validation failure the draft is untouched and `message` holds the
///   notice to show.
#[flutter_rust_bridge::frb(sync)]
pub fn melody_save() -> MelodyActionResponse {
    match lock_session().submit() {
        Ok(melody) => {
            MelodyActionResponse::success("Melody saved.", Some(melody.id().to_string()))
        }
        Err(err) => MelodyActionResponse::failure(err.to_string()),
    }
}

/// Lists saved melodies, newest first.
#[flutter_rust_bridge::frb(sync)]
pub fn melody_list() -> Vec<MelodyItem> {
    lock_session()
        .melodies()
        .into_iter()
        .map(to_melody_item)
        .collect()
}

/// Clears every melody when the user confirmed in the shell.
#[flutter_rust_bridge::frb(sync)]
pub fn melody_clear_all(confirmed: bool) -> MelodyActionResponse {
    let mut answer = |_: &str| confirmed;
    match lock_session().clear_all(&mut answer) {
        ClearOutcome::Cleared { removed } => {
            MelodyActionResponse::success(format!("Cleared {removed} melodies."), None)
        }
        ClearOutcome::Declined => MelodyActionResponse::failure("Nothing cleared."),
    }
}

fn lock_session() -> MutexGuard<'static, Session<InMemoryMelodyStore>> {
    let session = SESSION.get_or_init(|| Mutex::new(new_session()));
    session.lock().unwrap_or_else(|poisoned| {
        warn!("event=session_lock_recovered module=ffi status=degraded");
        poisoned.into_inner()
    })
}

fn new_session() -> Session<InMemoryMelodyStore> {
    let config = CoreConfig::from_env().unwrap_or_else(|err| {
        warn!("event=config_fallback module=ffi status=degraded error={err}");
        CoreConfig::default()
    });
    let clock = config.clock().unwrap_or_else(|err| {
        warn!("event=clock_fallback module=ffi status=degraded error={err}");
        LocalClock::default()
    });
    Session::with_parts(InMemoryMelodyStore::new(), clock)
}

fn to_melody_item(melody: &Melody) -> MelodyItem {
    MelodyItem {
        melody_id: melody.id().to_string(),
        title: melody.title().to_string(),
        content: melody.content().to_string(),
        tags: melody.tags().to_vec(),
        created_at: melody.created_at().to_string(),
    }
}
