use std::collections::{HashSet, VecDeque};

use crate::models::ContentId;

/// Default number of past recommendations kept for repeat avoidance
pub const DEFAULT_HISTORY_WINDOW: usize = 10;

/// Bounded, most-recent-first record of shuffled content ids.
///
/// Session-scoped; nothing here survives a restart. Every `record` call
/// counts, so a title watched twice produces two entries.
#[derive(Debug, Clone)]
pub struct ShuffleHistory {
    entries: VecDeque<ContentId>,
    bound: usize,
}

impl ShuffleHistory {
    pub fn new(bound: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(bound),
            bound,
        }
    }

    pub fn bound(&self) -> usize {
        self.bound
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Prepends an id, evicting the oldest entry past the bound
    pub fn record(&mut self, id: ContentId) {
        self.entries.push_front(id);
        self.entries.truncate(self.bound);
    }

    /// The most recent `k` ids (capped at the bound) as a lookup set
    pub fn recent(&self, k: usize) -> HashSet<ContentId> {
        self.entries.iter().take(k.min(self.bound)).cloned().collect()
    }

    /// All entries, most recent first
    pub fn ids(&self) -> Vec<ContentId> {
        self.entries.iter().cloned().collect()
    }
}

impl Default for ShuffleHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_WINDOW)
    }
}
