//! Melody store contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold saved melodies for one session, newest first.
//!
//! # Invariants
//! - `prepend` inserts at index 0; existing order is preserved behind it.
//! - `clear` replaces the contents with an empty sequence in one step.
//! - Stored melodies are never mutated in place.

use crate::model::melody::Melody;
use std::collections::VecDeque;

/// Store interface used by the session.
pub trait MelodyStore {
    /// Inserts a melody at the head of the store.
    fn prepend(&mut self, melody: Melody);
    /// Returns all melodies, newest first.
    fn melodies(&self) -> Vec<&Melody>;
    /// Number of stored melodies.
    fn len(&self) -> usize;
    /// Removes every melody and returns how many were dropped.
    fn clear(&mut self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Session-scoped store backed by a deque.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMelodyStore {
    items: VecDeque<Melody>,
}

impl InMemoryMelodyStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MelodyStore for InMemoryMelodyStore {
    fn prepend(&mut self, melody: Melody) {
        self.items.push_front(melody);
    }

    fn melodies(&self) -> Vec<&Melody> {
        self.items.iter().collect()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) -> usize {
        let removed = self.items.len();
        self.items = VecDeque::new();
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryMelodyStore, MelodyStore};
    use crate::model::melody::Melody;

    fn melody(title: &str) -> Melody {
        Melody::new(title, "body", vec![], "now").expect("valid melody")
    }

    #[test]
    fn prepend_orders_newest_first() {
        let mut store = InMemoryMelodyStore::new();
        store.prepend(melody("first"));
        store.prepend(melody("second"));

        let titles = store
            .melodies()
            .into_iter()
            .map(|m| m.title().to_string())
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["second", "first"]);
    }

    #[test]
    fn clear_reports_removed_count() {
        let mut store = InMemoryMelodyStore::new();
        assert!(store.is_empty());
        store.prepend(melody("a"));
        store.prepend(melody("b"));
        assert_eq!(store.clear(), 2);
        assert!(store.is_empty());
        assert_eq!(store.clear(), 0);
    }
}
