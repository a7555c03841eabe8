//! Composition constants and runtime configuration defaults

/// Default tile edge length in pixels when none is supplied
pub const DEFAULT_TILE_SIZE: u32 = 64;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed tile edge length in pixels
pub const MAX_TILE_SIZE: u32 = 4096;

/// Masks enumerated by the basic 16-tile scheme
pub const BASIC4_TILE_COUNT: usize = 16;

// The blob diagonal constraint admits exactly 47 of the 256 raw patterns
/// Masks enumerated by the blob 47-tile scheme
pub const BLOB8_TILE_COUNT: usize = 47;

/// Sheet columns for the basic scheme (4x4 grid)
pub const BASIC4_COLUMNS: u32 = 4;

/// Sheet columns for the blob scheme (8 columns, 6 rows)
pub const BLOB8_COLUMNS: u32 = 8;

// Output settings
/// Default output filename when none is supplied
pub const DEFAULT_OUTPUT: &str = "autotile_set.png";
