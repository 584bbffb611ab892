//! Repetition window for draw detection.
//!
//! Remembers the most recently inserted position keys together with how many
//! times each was seen. Capacity is [`PROGRESS_WINDOW`]; inserting a new key
//! into a full window evicts the oldest inserted key. Seeing a key that is
//! already present bumps its count without changing its slot.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::PROGRESS_WINDOW;
use super::key::BoardKey;

/// Bounded, insertion-ordered `BoardKey -> repeat count` map.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressWindow {
    entries: SmallVec<[(BoardKey, u32); PROGRESS_WINDOW]>,
}

impl ProgressWindow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one sighting of `key`, returning its updated count.
    pub fn record(&mut self, key: BoardKey) -> u32 {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 += 1;
            return entry.1;
        }
        if self.entries.len() == PROGRESS_WINDOW {
            self.entries.remove(0);
        }
        self.entries.push((key, 1));
        1
    }

    /// Times `key` has been seen while in the window (0 if absent).
    #[must_use]
    pub fn count(&self, key: BoardKey) -> u32 {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map_or(0, |&(_, n)| n)
    }

    /// Number of distinct keys whose count reached `limit`.
    #[must_use]
    pub fn repeated(&self, limit: u32) -> usize {
        self.entries.iter().filter(|&&(_, n)| n >= limit).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries oldest first.
    pub fn iter(&self) -> impl Iterator<Item = (BoardKey, u32)> + '_ {
        self.entries.iter().copied()
    }
}
