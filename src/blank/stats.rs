//! Blank-line statistics.

use serde::{Deserialize, Serialize};

use super::BlankLineOutcome;

/// Counts of blank-line changes made during a cleanup pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlankLineStats {
    /// Blank paragraphs created
    pub added: usize,

    /// Existing blanks flagged as preserved
    pub marked: usize,

    /// Insert-or-mark calls that changed nothing
    pub skipped: usize,

    /// Blank paragraphs removed
    pub removed: usize,
}

impl BlankLineStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one insert-or-mark outcome.
    pub fn record(&mut self, outcome: BlankLineOutcome) {
        match outcome {
            BlankLineOutcome::Added => self.added += 1,
            BlankLineOutcome::Marked => self.marked += 1,
            BlankLineOutcome::Skipped => self.skipped += 1,
        }
    }

    /// Count removed paragraphs.
    pub fn record_removed(&mut self, count: usize) {
        self.removed += count;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &BlankLineStats) {
        self.added += other.added;
        self.marked += other.marked;
        self.skipped += other.skipped;
        self.removed += other.removed;
    }

    /// Number of changes made to the document tree.
    pub fn total_changes(&self) -> usize {
        self.added + self.marked + self.removed
    }

    /// Check if nothing was changed.
    pub fn is_unchanged(&self) -> bool {
        self.total_changes() == 0
    }
}
