//! Input/output operations, configuration and error handling

/// Command-line interface and batch orchestration
pub mod cli;
/// Compositor constants and runtime defaults
pub mod configuration;
/// Error types and path context
pub mod error;
/// Source discovery, decoding and composite export
pub mod image;
/// Batch progress display
pub mod progress;
