//! Raster loading and PNG sheet export

use crate::io::error::{AutotileError, Result};
use image::RgbaImage;
use std::path::Path;

/// Load any supported image file and normalize it to RGBA8
///
/// Source pieces arrive in whatever format the user has on hand; the engine
/// works exclusively on rasters with an alpha channel.
///
/// # Errors
///
/// Returns [`AutotileError::ImageLoad`] when the file cannot be read or
/// decoded.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let decoded = image::open(path).map_err(|e| AutotileError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(decoded.to_rgba8())
}

/// Export the composed sheet as a PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_sheet_as_png(sheet: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| AutotileError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    sheet
        .save(output_path)
        .map_err(|e| AutotileError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
