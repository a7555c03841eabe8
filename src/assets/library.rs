//! Fixed library of the thirteen oriented tile parts
//!
//! The library is a pure function of the source set and the tile size:
//! rebuilding with identical inputs yields identical rasters, and no asset
//! is mutated after derivation.

use super::transform::{Rotation, orient, resize_square, transparent_square};
use crate::io::configuration::MAX_TILE_SIZE;
use crate::io::error::{AutotileError, Result};
use image::RgbaImage;

/// Role of a caller-supplied source image
///
/// Corner and edge roles are canonically depicted in their top-left (or
/// top/left) orientation; every other orientation is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceRole {
    /// Convex corner piece, top-left orientation
    OuterCorner,
    /// Concave corner piece, top-left orientation
    InnerCorner,
    /// Vertical edge piece, left orientation
    EdgeLeft,
    /// Horizontal edge piece, top orientation
    EdgeTop,
    /// Interior fill piece
    Fill,
}

impl SourceRole {
    /// All five roles in configuration order
    pub const ALL: [Self; 5] = [
        Self::OuterCorner,
        Self::InnerCorner,
        Self::EdgeLeft,
        Self::EdgeTop,
        Self::Fill,
    ];

    /// Stable kebab-case name used in CLI flags and error messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::OuterCorner => "outer-corner",
            Self::InnerCorner => "inner-corner",
            Self::EdgeLeft => "edge-left",
            Self::EdgeTop => "edge-top",
            Self::Fill => "fill",
        }
    }
}

/// The five canonical source rasters, any subset of which may be absent
///
/// Provided once at configuration time and read-only thereafter. Absent
/// roles degrade to transparent oriented assets rather than erroring, so a
/// partially assigned set still composes a previewable sheet.
#[derive(Debug, Clone, Default)]
pub struct SourceSet {
    /// Outer corner source, if supplied
    pub outer_corner: Option<RgbaImage>,
    /// Inner corner source, if supplied
    pub inner_corner: Option<RgbaImage>,
    /// Left edge source, if supplied
    pub edge_left: Option<RgbaImage>,
    /// Top edge source, if supplied
    pub edge_top: Option<RgbaImage>,
    /// Fill source, if supplied
    pub fill: Option<RgbaImage>,
}

impl SourceSet {
    /// Raster supplied for `role`, if any
    pub const fn get(&self, role: SourceRole) -> Option<&RgbaImage> {
        match role {
            SourceRole::OuterCorner => self.outer_corner.as_ref(),
            SourceRole::InnerCorner => self.inner_corner.as_ref(),
            SourceRole::EdgeLeft => self.edge_left.as_ref(),
            SourceRole::EdgeTop => self.edge_top.as_ref(),
            SourceRole::Fill => self.fill.as_ref(),
        }
    }

    /// Assign a raster to `role`, replacing any previous assignment
    pub fn insert(&mut self, role: SourceRole, raster: RgbaImage) {
        match role {
            SourceRole::OuterCorner => self.outer_corner = Some(raster),
            SourceRole::InnerCorner => self.inner_corner = Some(raster),
            SourceRole::EdgeLeft => self.edge_left = Some(raster),
            SourceRole::EdgeTop => self.edge_top = Some(raster),
            SourceRole::Fill => self.fill = Some(raster),
        }
    }

    /// Whether every role is absent
    pub const fn is_empty(&self) -> bool {
        self.outer_corner.is_none()
            && self.inner_corner.is_none()
            && self.edge_left.is_none()
            && self.edge_top.is_none()
            && self.fill.is_none()
    }

    /// Roles with no raster assigned, in configuration order
    pub fn missing_roles(&self) -> Vec<SourceRole> {
        SourceRole::ALL
            .into_iter()
            .filter(|role| self.get(*role).is_none())
            .collect()
    }
}

/// Identifier of one oriented asset in the library
///
/// A closed enum rather than a string key: every identifier maps to exactly
/// one raster and a mistyped lookup cannot silently return nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetId {
    /// Outer corner, top-left
    OuterTl,
    /// Outer corner, top-right
    OuterTr,
    /// Outer corner, bottom-right
    OuterBr,
    /// Outer corner, bottom-left
    OuterBl,
    /// Inner corner, top-left
    InnerTl,
    /// Inner corner, top-right
    InnerTr,
    /// Inner corner, bottom-right
    InnerBr,
    /// Inner corner, bottom-left
    InnerBl,
    /// Left edge
    EdgeL,
    /// Right edge
    EdgeR,
    /// Top edge
    EdgeT,
    /// Bottom edge
    EdgeB,
    /// Interior fill
    Fill,
}

impl AssetId {
    /// All thirteen identifiers in derivation order
    pub const ALL: [Self; 13] = [
        Self::OuterTl,
        Self::OuterTr,
        Self::OuterBr,
        Self::OuterBl,
        Self::InnerTl,
        Self::InnerTr,
        Self::InnerBr,
        Self::InnerBl,
        Self::EdgeL,
        Self::EdgeR,
        Self::EdgeT,
        Self::EdgeB,
        Self::Fill,
    ];

    /// The source role this asset derives from
    pub const fn source_role(self) -> SourceRole {
        match self {
            Self::OuterTl | Self::OuterTr | Self::OuterBr | Self::OuterBl => {
                SourceRole::OuterCorner
            }
            Self::InnerTl | Self::InnerTr | Self::InnerBr | Self::InnerBl => {
                SourceRole::InnerCorner
            }
            Self::EdgeL | Self::EdgeR => SourceRole::EdgeLeft,
            Self::EdgeT | Self::EdgeB => SourceRole::EdgeTop,
            Self::Fill => SourceRole::Fill,
        }
    }

    /// Orientation transform applied to the resampled source: (rotation, flip x, flip y)
    const fn derivation(self) -> (Rotation, bool, bool) {
        match self {
            Self::OuterTl | Self::InnerTl | Self::EdgeL | Self::EdgeT | Self::Fill => {
                (Rotation::None, false, false)
            }
            Self::OuterTr | Self::InnerTr => (Rotation::Quarter, false, false),
            Self::OuterBr | Self::InnerBr => (Rotation::Half, false, false),
            Self::OuterBl | Self::InnerBl => (Rotation::ThreeQuarter, false, false),
            Self::EdgeR => (Rotation::None, true, false),
            Self::EdgeB => (Rotation::None, false, true),
        }
    }
}

/// The thirteen oriented assets for one composition run
///
/// Each raster is a full `tile_size`-square tile in its final orientation,
/// so the composer can sample the like-named quadrant of any asset directly.
#[derive(Debug, Clone)]
pub struct AssetLibrary {
    tile_size: u32,
    outer_tl: RgbaImage,
    outer_tr: RgbaImage,
    outer_br: RgbaImage,
    outer_bl: RgbaImage,
    inner_tl: RgbaImage,
    inner_tr: RgbaImage,
    inner_br: RgbaImage,
    inner_bl: RgbaImage,
    edge_l: RgbaImage,
    edge_r: RgbaImage,
    edge_t: RgbaImage,
    edge_b: RgbaImage,
    fill: RgbaImage,
}

impl AssetLibrary {
    /// Derive the full oriented library from `sources` at `tile_size`
    ///
    /// Sources are resampled to `tile_size` squares before orientation, so
    /// arbitrary input dimensions are accepted. Absent roles yield fully
    /// transparent assets; composition then shows gaps instead of failing.
    ///
    /// # Errors
    ///
    /// - [`AutotileError::InvalidTileSize`] when `tile_size` is zero, odd
    ///   (quadrants are half-size), or above the allocation guard
    /// - [`AutotileError::MissingAllSources`] when every role is absent
    /// - [`AutotileError::MalformedAsset`] when a supplied raster has a zero
    ///   dimension
    pub fn build(sources: &SourceSet, tile_size: u32) -> Result<Self> {
        validate_tile_size(tile_size)?;

        if sources.is_empty() {
            return Err(AutotileError::MissingAllSources);
        }

        for role in SourceRole::ALL {
            if let Some(raster) = sources.get(role) {
                if raster.width() == 0 || raster.height() == 0 {
                    return Err(AutotileError::MalformedAsset {
                        role: role.name(),
                        reason: format!(
                            "raster has zero dimension ({}x{})",
                            raster.width(),
                            raster.height()
                        ),
                    });
                }
            }
        }

        let derive = |id: AssetId| {
            let (rotation, flip_x, flip_y) = id.derivation();
            sources.get(id.source_role()).map_or_else(
                || transparent_square(tile_size),
                |source| orient(&resize_square(source, tile_size), rotation, flip_x, flip_y),
            )
        };

        Ok(Self {
            tile_size,
            outer_tl: derive(AssetId::OuterTl),
            outer_tr: derive(AssetId::OuterTr),
            outer_br: derive(AssetId::OuterBr),
            outer_bl: derive(AssetId::OuterBl),
            inner_tl: derive(AssetId::InnerTl),
            inner_tr: derive(AssetId::InnerTr),
            inner_br: derive(AssetId::InnerBr),
            inner_bl: derive(AssetId::InnerBl),
            edge_l: derive(AssetId::EdgeL),
            edge_r: derive(AssetId::EdgeR),
            edge_t: derive(AssetId::EdgeT),
            edge_b: derive(AssetId::EdgeB),
            fill: derive(AssetId::Fill),
        })
    }

    /// Edge length of every asset in the library
    pub const fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Edge length of one quadrant
    pub const fn half(&self) -> u32 {
        self.tile_size / 2
    }

    /// Oriented raster for `id`; total over all thirteen identifiers
    pub const fn get(&self, id: AssetId) -> &RgbaImage {
        match id {
            AssetId::OuterTl => &self.outer_tl,
            AssetId::OuterTr => &self.outer_tr,
            AssetId::OuterBr => &self.outer_br,
            AssetId::OuterBl => &self.outer_bl,
            AssetId::InnerTl => &self.inner_tl,
            AssetId::InnerTr => &self.inner_tr,
            AssetId::InnerBr => &self.inner_br,
            AssetId::InnerBl => &self.inner_bl,
            AssetId::EdgeL => &self.edge_l,
            AssetId::EdgeR => &self.edge_r,
            AssetId::EdgeT => &self.edge_t,
            AssetId::EdgeB => &self.edge_b,
            AssetId::Fill => &self.fill,
        }
    }
}

fn validate_tile_size(tile_size: u32) -> Result<()> {
    if tile_size == 0 {
        return Err(AutotileError::InvalidTileSize {
            value: tile_size,
            reason: "tile size must be positive",
        });
    }
    if tile_size % 2 != 0 {
        return Err(AutotileError::InvalidTileSize {
            value: tile_size,
            reason: "tile size must be even so quadrants divide cleanly",
        });
    }
    if tile_size > MAX_TILE_SIZE {
        return Err(AutotileError::InvalidTileSize {
            value: tile_size,
            reason: "tile size exceeds the maximum allowed edge length",
        });
    }
    Ok(())
}
