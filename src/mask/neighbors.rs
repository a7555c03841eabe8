//! Neighbor presence bitmask value type
//!
//! A mask records which of the eight surrounding grid cells hold the same
//! terrain as the current cell. Masks are immutable value objects decoded
//! from enumeration counters; they carry no behavior beyond bit decomposition.

/// Presence of each of the eight surrounding grid cells
///
/// A set field means the neighbor in that direction is connected and the
/// shared border should blend rather than show an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NeighborMask {
    /// North neighbor present
    pub n: bool,
    /// West neighbor present
    pub w: bool,
    /// East neighbor present
    pub e: bool,
    /// South neighbor present
    pub s: bool,
    /// North-west neighbor present
    pub nw: bool,
    /// North-east neighbor present
    pub ne: bool,
    /// South-west neighbor present
    pub sw: bool,
    /// South-east neighbor present
    pub se: bool,
}

impl NeighborMask {
    /// Decode the four orthogonal bits of `bits`, forcing every diagonal on
    ///
    /// Bit layout: 0 = north, 1 = west, 2 = east, 3 = south. The 16-tile
    /// scheme has no concept of a broken diagonal, so all four diagonal
    /// fields come back `true`.
    pub const fn from_orthogonal_bits(bits: u8) -> Self {
        Self {
            n: bits & 1 != 0,
            w: bits & 2 != 0,
            e: bits & 4 != 0,
            s: bits & 8 != 0,
            nw: true,
            ne: true,
            sw: true,
            se: true,
        }
    }

    /// Decode all eight bits of `bits`
    ///
    /// Bit layout: 0 = north, 1 = west, 2 = east, 3 = south, 4 = north-west,
    /// 5 = north-east, 6 = south-west, 7 = south-east.
    pub const fn from_full_bits(bits: u8) -> Self {
        Self {
            n: bits & 1 != 0,
            w: bits & 2 != 0,
            e: bits & 4 != 0,
            s: bits & 8 != 0,
            nw: bits & 16 != 0,
            ne: bits & 32 != 0,
            sw: bits & 64 != 0,
            se: bits & 128 != 0,
        }
    }

    /// Whether every set diagonal has both of its adjacent orthogonals set
    ///
    /// A diagonal connection without both flanking orthogonal connections has
    /// no drawable representation in the blob scheme, so such masks are
    /// discarded during enumeration.
    pub const fn diagonals_supported(&self) -> bool {
        (!self.nw || (self.n && self.w))
            && (!self.ne || (self.n && self.e))
            && (!self.sw || (self.s && self.w))
            && (!self.se || (self.s && self.e))
    }
}
