//! Oriented asset derivation from canonical source images
//!
//! Five caller-supplied pieces (outer corner, inner corner, left edge, top
//! edge, fill) expand into the thirteen oriented assets the composer samples
//! from, via quarter-turn rotation and axis mirroring.

/// Fixed library of the thirteen oriented tile parts
pub mod library;
/// Square raster rotation, mirroring, and resampling
pub mod transform;

pub use library::{AssetId, AssetLibrary, SourceRole, SourceSet};
