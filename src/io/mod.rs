//! Input/output operations
//!
//! Puzzle and motif parsing, the command-line front end, PNG export,
//! progress display, constants and the crate-wide error type.

/// Command-line interface and batch processing
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG export of reconstructed mosaics
pub mod image;
/// Puzzle text decoding
pub mod parser;
/// Progress display
pub mod progress;
