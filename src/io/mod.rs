//! Input/output operations, CLI, and error handling

/// Command-line interface and command orchestration
pub mod cli;
/// PNG decode/encode at the buffer boundary
pub mod codec;
/// Defaults and tuning constants
pub mod configuration;
/// Error types and the crate-wide Result alias
pub mod error;
/// Progress display for multi-file operations
pub mod progress;
