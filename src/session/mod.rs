//! Interactive editing session with tool state and undo history

/// Tool state machine driving strokes and commits
pub mod editor;
/// Snapshot log supporting single-step undo
pub mod history;

pub use editor::{EditSession, Tool};
pub use history::VersionHistory;
