//! Session state and event dispatch.
//!
//! # Responsibility
//! - Own the draft, the melody store and the clock for one UI session.
//! - Apply save and clear-all transitions as single synchronous steps.
//!
//! # Invariants
//! - A successful save prepends exactly one melody and resets the draft.
//! - A rejected save changes nothing.
//! - Clear-all only touches the store after the prompt confirms.

use crate::model::draft::Draft;
use crate::model::melody::{Melody, ValidationError};
use crate::repo::melody_store::{InMemoryMelodyStore, MelodyStore};
use crate::service::clock::{Clock, LocalClock};
use crate::service::composer::compose_melody;
use log::{debug, info, warn};

/// Prompt text shown before clearing every melody.
pub const CLEAR_ALL_CONFIRM_MESSAGE: &str = "Clear all melodies? This cannot be undone.";

/// Text shown in place of the list when the store is empty.
pub const EMPTY_STORE_MESSAGE: &str = "No melodies yet. Compose a new one!";

/// Blocking yes/no confirmation supplied by the host.
pub trait ConfirmPrompt {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> ConfirmPrompt for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// Inbound user intents from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    TitleChanged(String),
    ContentChanged(String),
    TagsChanged(String),
    Submit,
    ClearAll,
}

/// Result of a clear-all request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    Cleared { removed: usize },
    Declined,
}

/// Result of dispatching one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    DraftUpdated,
    Saved(Melody),
    Rejected(ValidationError),
    Cleared { removed: usize },
    ClearDeclined,
}

/// One UI session: draft plus saved melodies.
pub struct Session<S: MelodyStore = InMemoryMelodyStore> {
    draft: Draft,
    store: S,
    clock: Box<dyn Clock + Send>,
}

impl Session<InMemoryMelodyStore> {
    /// Starts an empty session stamping melodies with local time.
    pub fn new() -> Self {
        Self::with_parts(InMemoryMelodyStore::new(), LocalClock::default())
    }
}

impl Default for Session<InMemoryMelodyStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: MelodyStore> Session<S> {
    /// Creates a session over the given store and clock.
    pub fn with_parts(store: S, clock: impl Clock + Send + 'static) -> Self {
        Self {
            draft: Draft::default(),
            store,
            clock: Box::new(clock),
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Saved melodies, newest first.
    pub fn melodies(&self) -> Vec<&Melody> {
        self.store.melodies()
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.draft.title = value.into();
    }

    pub fn set_content(&mut self, value: impl Into<String>) {
        self.draft.content = value.into();
    }

    pub fn set_tags_raw(&mut self, value: impl Into<String>) {
        self.draft.tags_raw = value.into();
    }

    /// Saves the current draft as a new melody.
    ///
    /// On success the melody is prepended and the draft reset. On failure the
    /// draft and store are left as they were.
    ///
    /// # Errors
    /// - `ValidationError::EmptyField` when title or content is blank.
    pub fn submit(&mut self) -> Result<Melody, ValidationError> {
        let melody = match compose_melody(&self.draft, self.clock.as_ref()) {
            Ok(melody) => melody,
            Err(err) => {
                let ValidationError::EmptyField { field } = err;
                warn!(
                    "event=melody_rejected module=session status=error reason=empty_field field={}",
                    field.as_str()
                );
                return Err(err);
            }
        };

        self.store.prepend(melody.clone());
        self.draft.reset();
        info!(
            "event=melody_saved module=session status=ok melody_id={} tag_count={} store_len={}",
            melody.id(),
            melody.tags().len(),
            self.store.len()
        );
        Ok(melody)
    }

    /// Clears every melody once `prompt` confirms.
    pub fn clear_all(&mut self, prompt: &mut dyn ConfirmPrompt) -> ClearOutcome {
        if !prompt.confirm(CLEAR_ALL_CONFIRM_MESSAGE) {
            debug!("event=clear_declined module=session status=ok");
            return ClearOutcome::Declined;
        }

        let removed = self.store.clear();
        info!("event=store_cleared module=session status=ok removed={removed}");
        ClearOutcome::Cleared { removed }
    }

    /// Applies one inbound event.
    pub fn dispatch(
        &mut self,
        event: SessionEvent,
        prompt: &mut dyn ConfirmPrompt,
    ) -> EventOutcome {
        match event {
            SessionEvent::TitleChanged(value) => {
                self.set_title(value);
                EventOutcome::DraftUpdated
            }
            SessionEvent::ContentChanged(value) => {
                self.set_content(value);
                EventOutcome::DraftUpdated
            }
            SessionEvent::TagsChanged(value) => {
                self.set_tags_raw(value);
                EventOutcome::DraftUpdated
            }
            SessionEvent::Submit => match self.submit() {
                Ok(melody) => EventOutcome::Saved(melody),
                Err(err) => EventOutcome::Rejected(err),
            },
            SessionEvent::ClearAll => match self.clear_all(prompt) {
                ClearOutcome::Cleared { removed } => EventOutcome::Cleared { removed },
                ClearOutcome::Declined => EventOutcome::ClearDeclined,
            },
        }
    }
}
