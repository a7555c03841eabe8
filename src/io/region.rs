//! Rectangular region extraction from larger source sheets
//!
//! Lets a caller carve one piece out of an existing sprite sheet and feed it
//! to the engine as a canonical source, instead of preparing five separate
//! image files.

use crate::io::error::{Result, invalid_parameter};
use image::{RgbaImage, imageops};
use std::str::FromStr;

/// Pixel-space rectangle within a source sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Left edge of the rectangle
    pub x: u32,
    /// Top edge of the rectangle
    pub y: u32,
    /// Rectangle width, always positive
    pub width: u32,
    /// Rectangle height, always positive
    pub height: u32,
}

impl FromStr for Region {
    type Err = crate::io::error::AutotileError;

    /// Parse a region from the `X,Y,WxH` CLI form
    ///
    /// # Errors
    ///
    /// Returns [`crate::io::error::AutotileError::InvalidParameter`] when the
    /// string is not four integers in that shape or the size is zero.
    fn from_str(value: &str) -> Result<Self> {
        let malformed = || {
            invalid_parameter(
                "region",
                &value,
                &"expected 'X,Y,WxH' with positive width and height",
            )
        };

        let mut parts = value.split(',');
        let (Some(x_str), Some(y_str), Some(size_str), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };

        let mut size_parts = size_str.split('x');
        let (Some(w_str), Some(h_str), None) =
            (size_parts.next(), size_parts.next(), size_parts.next())
        else {
            return Err(malformed());
        };

        let x = x_str.trim().parse().ok().ok_or_else(malformed)?;
        let y = y_str.trim().parse().ok().ok_or_else(malformed)?;
        let width: u32 = w_str.trim().parse().ok().ok_or_else(malformed)?;
        let height: u32 = h_str.trim().parse().ok().ok_or_else(malformed)?;

        if width == 0 || height == 0 {
            return Err(malformed());
        }

        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }
}

/// Copy the pixels under `region` out of `source` as an owned raster
///
/// # Errors
///
/// Returns [`crate::io::error::AutotileError::InvalidParameter`] when the
/// rectangle extends past the source bounds; the engine never guesses at
/// out-of-range pixels.
pub fn extract(source: &RgbaImage, region: Region) -> Result<RgbaImage> {
    let within_x = region
        .x
        .checked_add(region.width)
        .is_some_and(|right| right <= source.width());
    let within_y = region
        .y
        .checked_add(region.height)
        .is_some_and(|bottom| bottom <= source.height());

    if !within_x || !within_y {
        return Err(invalid_parameter(
            "region",
            &format!(
                "{},{},{}x{}",
                region.x, region.y, region.width, region.height
            ),
            &format!(
                "rectangle leaves the {}x{} source bounds",
                source.width(),
                source.height()
            ),
        ));
    }

    Ok(imageops::crop_imm(source, region.x, region.y, region.width, region.height).to_image())
}
