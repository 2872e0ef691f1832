//! Snapshot log supporting single-step undo
//!
//! The history is append-only apart from a pop-last revert and always holds
//! at least one snapshot: the buffer the session opened with.

use crate::raster::buffer::ColorBuffer;

/// Ordered sequence of buffer snapshots with an undo floor of one entry
#[derive(Debug, Clone)]
pub struct VersionHistory {
    base: ColorBuffer,
    edits: Vec<ColorBuffer>,
}

impl VersionHistory {
    /// Start a history from an initial buffer
    pub const fn new(initial: ColorBuffer) -> Self {
        Self {
            base: initial,
            edits: Vec::new(),
        }
    }

    /// The most recent snapshot
    pub fn current(&self) -> &ColorBuffer {
        self.edits.last().unwrap_or(&self.base)
    }

    /// Append a snapshot
    pub fn commit(&mut self, snapshot: ColorBuffer) {
        self.edits.push(snapshot);
    }

    /// Discard the most recent snapshot
    ///
    /// At most one snapshot is removed per invocation, and the initial
    /// snapshot is never removed. Returns whether anything was undone.
    pub fn undo(&mut self) -> bool {
        self.edits.pop().is_some()
    }

    /// Number of snapshots currently held (always at least one)
    pub fn len(&self) -> usize {
        self.edits.len() + 1
    }

    /// A history is never empty; present for API completeness
    pub const fn is_empty(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::color::Color;

    fn snapshot(level: f32) -> ColorBuffer {
        ColorBuffer::filled(2, 2, Color::gray(level)).unwrap_or_else(|_| {
            unreachable!("2x2 buffer should construct");
        })
    }

    #[test]
    fn test_undo_floor_of_one() {
        let mut history = VersionHistory::new(snapshot(0.0));
        history.commit(snapshot(0.5));
        history.commit(snapshot(1.0));
        assert_eq!(history.len(), 3);

        assert!(history.undo());
        assert!(history.undo());
        assert_eq!(history.len(), 1);

        // The initial snapshot can never be removed
        assert!(!history.undo());
        assert_eq!(history.current(), &snapshot(0.0));
    }

    #[test]
    fn test_current_tracks_latest_commit() {
        let mut history = VersionHistory::new(snapshot(0.0));
        assert_eq!(history.current(), &snapshot(0.0));
        history.commit(snapshot(0.25));
        assert_eq!(history.current(), &snapshot(0.25));
    }
}
