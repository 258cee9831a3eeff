//! Snapshot-based undo history
//!
//! Every state-changing move pushes a deep copy of the four pile groups
//! before mutating; undo pops the most recent copy and restores it
//! wholesale. A snapshot is O(52) cards, so unbounded growth over a session
//! is acceptable.

use crate::game::{Pile, FOUNDATION_COUNT, TABLEAU_COUNT};
use serde::{Deserialize, Serialize};

/// A deep, fully independent copy of the table taken immediately before a
/// move commits. Draw mode, RNG state, and the history itself are not part
/// of a snapshot; undo rewinds cards, not configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub stock: Pile,
    pub waste: Pile,
    pub tableau: [Pile; TABLEAU_COUNT],
    pub foundations: [Pile; FOUNDATION_COUNT],
}

/// Ordered stack of snapshots, most recent at the end.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryStack {
    entries: Vec<Snapshot>,
}

impl HistoryStack {
    pub fn new() -> Self {
        HistoryStack { entries: Vec::new() }
    }

    /// Push a snapshot. Append-only; nothing but undo removes entries.
    pub fn save(&mut self, snapshot: Snapshot) {
        self.entries.push(snapshot);
    }

    /// Pop the most recent snapshot, or `None` when there is no history.
    pub fn undo_pop(&mut self) -> Option<Snapshot> {
        self.entries.pop()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all history (new game).
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
