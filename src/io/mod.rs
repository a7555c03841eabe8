//! Input/output operations and error handling
//!
//! Everything between the pure composition engine and the outside world:
//! command-line parsing, raster loading and region extraction, sheet export,
//! and the crate-wide error type.

/// Command-line interface and processing pipeline
pub mod cli;
/// Composition constants and runtime configuration defaults
pub mod configuration;
/// Error types for composition and I/O operations
pub mod error;
/// Raster loading and PNG sheet export
pub mod image;
/// Rectangular region extraction from larger source sheets
pub mod region;
