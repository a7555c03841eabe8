//! Tiling schemes and ordered mask enumeration
//!
//! Enumeration order is load-bearing: the position of a mask in the returned
//! list is the cell index of its composed tile in the packed sheet, and
//! downstream consumers rely on that correspondence.

use super::neighbors::NeighborMask;
use crate::io::configuration::{
    BASIC4_COLUMNS, BASIC4_TILE_COUNT, BLOB8_COLUMNS, BLOB8_TILE_COUNT,
};
use crate::io::error::AutotileError;
use std::str::FromStr;

/// Tiling scheme selecting which neighbor combinations exist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// Four orthogonal neighbor bits, diagonals always connected (16 tiles)
    ///
    /// Diagonals are not independently controllable in this scheme, so the
    /// inner-corner assets are never selected. This mirrors the classic
    /// 16-tile convention and is intentional, not a gap.
    Basic4,
    /// Eight neighbor bits with the blob diagonal constraint (47 tiles)
    Blob8,
}

impl Scheme {
    /// Fixed column count of the packed sheet for this scheme
    pub const fn columns(self) -> u32 {
        match self {
            Self::Basic4 => BASIC4_COLUMNS,
            Self::Blob8 => BLOB8_COLUMNS,
        }
    }

    /// Number of valid masks the scheme enumerates
    pub const fn tile_count(self) -> usize {
        match self {
            Self::Basic4 => BASIC4_TILE_COUNT,
            Self::Blob8 => BLOB8_TILE_COUNT,
        }
    }

    /// Stable lowercase name used in CLI output
    pub const fn name(self) -> &'static str {
        match self {
            Self::Basic4 => "basic4",
            Self::Blob8 => "blob8",
        }
    }
}

impl FromStr for Scheme {
    type Err = AutotileError;

    /// Parse a scheme from its Rust name or the original tile-count alias
    ///
    /// # Errors
    ///
    /// Returns [`AutotileError::InvalidScheme`] for anything other than
    /// `basic4`/`16` or `blob8`/`47` (case-insensitive).
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "basic4" | "16" => Ok(Self::Basic4),
            "blob8" | "47" => Ok(Self::Blob8),
            _ => Err(AutotileError::InvalidScheme {
                value: value.to_string(),
            }),
        }
    }
}

/// Enumerate every valid neighbor mask for `scheme` in ascending counter order
///
/// `Basic4` decodes the 4-bit counters 0..=15 with diagonals forced on.
/// `Blob8` decodes the 8-bit counters 0..=255 and discards any mask whose
/// diagonals lack both flanking orthogonals, leaving exactly 47 survivors.
/// The function is pure: repeated calls yield identical sequences.
pub fn enumerate(scheme: Scheme) -> Vec<NeighborMask> {
    match scheme {
        Scheme::Basic4 => (0..BASIC4_TILE_COUNT as u8)
            .map(NeighborMask::from_orthogonal_bits)
            .collect(),
        Scheme::Blob8 => (0..=u8::MAX)
            .map(NeighborMask::from_full_bits)
            .filter(NeighborMask::diagonals_supported)
            .collect(),
    }
}
