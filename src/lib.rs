//! Autotile sheet synthesis from a handful of canonical tile pieces
//!
//! The system derives a fixed library of oriented tile parts from up to five
//! source images, enumerates every valid neighbor combination for the selected
//! tiling scheme, and composes one tile per combination into a packed sheet
//! ready for use as a game-engine tileset.

#![forbid(unsafe_code)]

/// Oriented asset derivation from canonical source images
pub mod assets;
/// Per-quadrant asset resolution and packed sheet composition
pub mod compose;
/// Input/output operations and error handling
pub mod io;
/// Neighbor masks and tiling scheme enumeration
pub mod mask;

pub use io::error::{AutotileError, Result};
