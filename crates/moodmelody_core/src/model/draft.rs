//! Composer working state.
//!
//! Draft fields are plain text at the host boundary. Trim checks and tag
//! parsing happen in the composer, never here.

/// In-progress form values not yet saved as a melody.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub content: String,
    /// Raw tag text exactly as typed.
    pub tags_raw: String,
}

impl Draft {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        tags_raw: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            tags_raw: tags_raw.into(),
        }
    }

    /// Resets all three fields to empty strings together.
    pub fn reset(&mut self) {
        self.title.clear();
        self.content.clear();
        self.tags_raw.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.content.is_empty() && self.tags_raw.is_empty()
    }
}
