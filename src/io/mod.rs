//! Input/output operations and error handling

/// Command-line interface and run orchestration
pub mod cli;
/// Board constants and runtime configuration defaults
pub mod configuration;
/// Error types and the crate result alias
pub mod error;
/// Status map PNG export
pub mod image;
/// Phase progress display
pub mod progress;
/// Textual status map output
pub mod render;
