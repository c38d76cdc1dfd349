//! Melody domain model.
//!
//! # Responsibility
//! - Define the saved memo record and its validation error.
//! - Keep records read-only once constructed.
//!
//! # Invariants
//! - `id` is stable and never reused for another melody.
//! - `title` and `content` were not blank (see `model::text`) at creation time
//!   and are stored exactly as given.
//! - `tags` keep input order; duplicates are retained.
//! - No API mutates a melody after construction.

use crate::model::text::is_blank;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one saved melody.
pub type MelodyId = Uuid;

/// Draft field checked by composer validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Content,
}

impl DraftField {
    /// Stable lowercase label used in logs and host envelopes.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Content => "content",
        }
    }
}

/// Validation error raised when a draft cannot become a melody.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty or whitespace-only.
    EmptyField { field: DraftField },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            // Same notice regardless of which field tripped the check.
            Self::EmptyField { .. } => write!(f, "Please enter both a title and content."),
        }
    }
}

impl Error for ValidationError {}

/// One saved melody memo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Melody {
    id: MelodyId,
    title: String,
    content: String,
    tags: Vec<String>,
    created_at: String,
}

impl Melody {
    /// Creates a melody with a freshly generated id.
    ///
    /// # Errors
    /// - `EmptyField { Title }` when `title` is blank after trim.
    /// - `EmptyField { Content }` when `content` is blank after trim.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        tags: Vec<String>,
        created_at: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), title, content, tags, created_at)
    }

    /// Creates a melody with a caller-provided id.
    ///
    /// Tags are taken as-is; callers are expected to pass normalizer output.
    pub fn with_id(
        id: MelodyId,
        title: impl Into<String>,
        content: impl Into<String>,
        tags: Vec<String>,
        created_at: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let content = content.into();
        if is_blank(&title) {
            return Err(ValidationError::EmptyField {
                field: DraftField::Title,
            });
        }
        if is_blank(&content) {
            return Err(ValidationError::EmptyField {
                field: DraftField::Content,
            });
        }

        Ok(Self {
            id,
            title,
            content,
            tags,
            created_at: created_at.into(),
        })
    }

    pub fn id(&self) -> MelodyId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Normalized tags in input order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Local human-readable creation timestamp.
    pub fn created_at(&self) -> &str {
        &self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::{DraftField, Melody, ValidationError};

    #[test]
    fn new_keeps_untrimmed_values() {
        let melody = Melody::new("  Rain  ", "\tsoft piano\n", vec![], "2026/1/2 3:04:05")
            .expect("non-blank fields should validate");
        assert_eq!(melody.title(), "  Rain  ");
        assert_eq!(melody.content(), "\tsoft piano\n");
        assert!(!melody.id().is_nil());
    }

    #[test]
    fn title_is_checked_before_content() {
        let err = Melody::new(" ", "", vec![], "now").unwrap_err();
        assert_eq!(
            err,
            ValidationError::EmptyField {
                field: DraftField::Title
            }
        );
    }

    #[test]
    fn validation_notice_mentions_both_fields() {
        let err = ValidationError::EmptyField {
            field: DraftField::Content,
        };
        assert_eq!(err.to_string(), "Please enter both a title and content.");
    }

    #[test]
    fn bom_only_fields_are_blank_but_next_line_is_not() {
        let err = Melody::new("\u{FEFF}", "body", vec![], "now").unwrap_err();
        assert_eq!(
            err,
            ValidationError::EmptyField {
                field: DraftField::Title
            }
        );
        let err = Melody::new("title", " \u{FEFF} ", vec![], "now").unwrap_err();
        assert_eq!(
            err,
            ValidationError::EmptyField {
                field: DraftField::Content
            }
        );

        let melody = Melody::new("\u{85}", "body", vec![], "now").unwrap();
        assert_eq!(melody.title(), "\u{85}");
    }
}
