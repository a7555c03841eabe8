//! Packed sheet composition from enumerated masks
//!
//! One composed tile per mask, placed at the grid cell matching its position
//! in the enumeration. Tile order must follow the input exactly: game engines
//! map tile indices to sheet cells through scheme plus enumeration order.

use super::quadrant::{Quadrant, resolve};
use crate::assets::{AssetId, AssetLibrary};
use crate::io::error::{AutotileError, Result};
use crate::mask::NeighborMask;
use image::{GenericImageView, RgbaImage, imageops};

/// Compose one packed sheet from `masks` in enumeration order
///
/// The sheet is `columns * tile_size` wide and `ceil(len / columns) *
/// tile_size` tall, initially transparent; trailing cells of the last row
/// stay transparent. Each quadrant draws two layers: the fill under-layer
/// first, then the resolved part on top unless the part is fill itself. The
/// under-layer keeps a partially assigned library from punching holes where
/// a specific part is fully transparent.
///
/// # Errors
///
/// Returns [`AutotileError::InvalidParameter`] when `columns` is zero.
pub fn compose(
    masks: &[NeighborMask],
    library: &AssetLibrary,
    columns: u32,
) -> Result<RgbaImage> {
    if columns == 0 {
        return Err(AutotileError::InvalidParameter {
            parameter: "columns",
            value: columns.to_string(),
            reason: "sheet layout requires at least one column".to_string(),
        });
    }

    let tile_size = library.tile_size();
    let rows = (masks.len() as u32).div_ceil(columns);
    let mut sheet = RgbaImage::new(columns * tile_size, rows * tile_size);

    for (index, mask) in masks.iter().enumerate() {
        let origin_x = (index as u32 % columns) * tile_size;
        let origin_y = (index as u32 / columns) * tile_size;
        draw_tile(&mut sheet, library, *mask, origin_x, origin_y);
    }

    Ok(sheet)
}

/// Draw one composed tile at `(origin_x, origin_y)` on the sheet
fn draw_tile(
    sheet: &mut RgbaImage,
    library: &AssetLibrary,
    mask: NeighborMask,
    origin_x: u32,
    origin_y: u32,
) {
    let half = library.half();

    for quadrant in Quadrant::ALL {
        let (quad_x, quad_y) = quadrant.origin(half);
        let dest_x = i64::from(origin_x + quad_x);
        let dest_y = i64::from(origin_y + quad_y);

        blit_part(sheet, library, AssetId::Fill, quad_x, quad_y, half, dest_x, dest_y);

        let (vertical, horizontal, diagonal) = quadrant.neighbor_bits(mask);
        let part = resolve(quadrant, vertical, horizontal, diagonal);
        if part != AssetId::Fill {
            blit_part(sheet, library, part, quad_x, quad_y, half, dest_x, dest_y);
        }
    }
}

/// Alpha-composite one half-size sub-rectangle of an asset onto the sheet
///
/// The source sub-rectangle is the like-named quadrant of the asset, which
/// was already built as a full correctly oriented tile.
fn blit_part(
    sheet: &mut RgbaImage,
    library: &AssetLibrary,
    id: AssetId,
    src_x: u32,
    src_y: u32,
    half: u32,
    dest_x: i64,
    dest_y: i64,
) {
    let part = library.get(id).view(src_x, src_y, half, half);
    imageops::overlay(sheet, &*part, dest_x, dest_y);
}
