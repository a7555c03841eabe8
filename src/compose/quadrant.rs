//! Quadrant identity and asset selection
//!
//! Every tile splits into four half-size quadrants resolved independently
//! from three neighbor bits. The selection rule is identical for all four
//! quadrants, parameterized only by quadrant identity, and is total over
//! the eight input combinations.

use crate::assets::AssetId;
use crate::mask::NeighborMask;

/// One of the four square sub-regions of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    /// Top-left
    Tl,
    /// Top-right
    Tr,
    /// Bottom-left
    Bl,
    /// Bottom-right
    Br,
}

impl Quadrant {
    /// All four quadrants in draw order
    pub const ALL: [Self; 4] = [Self::Tl, Self::Tr, Self::Bl, Self::Br];

    /// The three neighbor bits governing this quadrant
    ///
    /// Returned as (vertical, horizontal, diagonal): the top quadrants read
    /// north, the bottom quadrants south; the left quadrants read west, the
    /// right quadrants east; the diagonal sits between the two.
    pub const fn neighbor_bits(self, mask: NeighborMask) -> (bool, bool, bool) {
        match self {
            Self::Tl => (mask.n, mask.w, mask.nw),
            Self::Tr => (mask.n, mask.e, mask.ne),
            Self::Bl => (mask.s, mask.w, mask.sw),
            Self::Br => (mask.s, mask.e, mask.se),
        }
    }

    /// Origin of this quadrant's half-size sub-rectangle within a tile
    pub const fn origin(self, half: u32) -> (u32, u32) {
        match self {
            Self::Tl => (0, 0),
            Self::Tr => (half, 0),
            Self::Bl => (0, half),
            Self::Br => (half, half),
        }
    }

    /// The outer-corner asset oriented for this quadrant
    const fn outer(self) -> AssetId {
        match self {
            Self::Tl => AssetId::OuterTl,
            Self::Tr => AssetId::OuterTr,
            Self::Bl => AssetId::OuterBl,
            Self::Br => AssetId::OuterBr,
        }
    }

    /// The inner-corner asset oriented for this quadrant
    const fn inner(self) -> AssetId {
        match self {
            Self::Tl => AssetId::InnerTl,
            Self::Tr => AssetId::InnerTr,
            Self::Bl => AssetId::InnerBl,
            Self::Br => AssetId::InnerBr,
        }
    }
}

/// Select the oriented asset covering one quadrant
///
/// Every oriented asset is a full, correctly oriented tile, so the composer
/// always samples the like-named quadrant of whatever this returns. With
/// neither neighbor the quadrant shows an outer corner; with exactly one it
/// shows the matching edge; with both it shows fill, unless the diagonal is
/// broken, which exposes an inner corner.
pub const fn resolve(
    quadrant: Quadrant,
    vertical: bool,
    horizontal: bool,
    diagonal: bool,
) -> AssetId {
    match (vertical, horizontal, diagonal) {
        (false, false, _) => quadrant.outer(),
        (false, true, _) => match quadrant {
            Quadrant::Tl | Quadrant::Tr => AssetId::EdgeT,
            Quadrant::Bl | Quadrant::Br => AssetId::EdgeB,
        },
        (true, false, _) => match quadrant {
            Quadrant::Tl | Quadrant::Bl => AssetId::EdgeL,
            Quadrant::Tr | Quadrant::Br => AssetId::EdgeR,
        },
        (true, true, false) => quadrant.inner(),
        (true, true, true) => AssetId::Fill,
    }
}
