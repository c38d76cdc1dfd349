//! Draft-to-melody composition.
//!
//! # Responsibility
//! - Validate draft presence rules and build a new `Melody`.
//!
//! # Invariants
//! - Composition is pure with respect to the draft and the store; the session
//!   applies prepend and reset only after this returns `Ok`.
//! - Title and content are stored untrimmed.

use crate::model::draft::Draft;
use crate::model::melody::{Melody, ValidationError};
use crate::service::clock::Clock;
use crate::service::tag_normalizer::normalize_tags;

/// Builds a melody from the current draft values.
///
/// # Errors
/// - `ValidationError::EmptyField` when title or content is blank after trim.
pub fn compose_melody(draft: &Draft, clock: &dyn Clock) -> Result<Melody, ValidationError> {
    let tags = normalize_tags(&draft.tags_raw);
    Melody::new(
        draft.title.as_str(),
        draft.content.as_str(),
        tags,
        clock.now_label(),
    )
}
