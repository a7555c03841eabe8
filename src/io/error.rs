//! Error types for composition and I/O operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all composition operations
#[derive(Debug)]
pub enum AutotileError {
    /// Failed to load a source image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to save the composed sheet to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Scheme value outside the two defined tiling schemes
    InvalidScheme {
        /// Provided scheme string
        value: String,
    },

    /// Tile edge length fails validation
    InvalidTileSize {
        /// Provided tile size
        value: u32,
        /// Explanation of why the value is invalid
        reason: &'static str,
    },

    /// Every source role is absent
    ///
    /// Composition would render an entirely blank sheet, so the run aborts
    /// instead. A partially assigned set is not an error; affected assets
    /// degrade to transparent.
    MissingAllSources,

    /// A supplied source raster cannot be used
    MalformedAsset {
        /// Role the raster was supplied for
        role: &'static str,
        /// Description of what is wrong with the raster
        reason: String,
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for AutotileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export sheet to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidScheme { value } => {
                write!(
                    f,
                    "Unknown tiling scheme '{value}' (expected 'basic4'/'16' or 'blob8'/'47')"
                )
            }
            Self::InvalidTileSize { value, reason } => {
                write!(f, "Invalid tile size {value}: {reason}")
            }
            Self::MissingAllSources => {
                write!(f, "No source images supplied; the sheet would be blank")
            }
            Self::MalformedAsset { role, reason } => {
                write!(f, "Malformed source for role '{role}': {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for AutotileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for composition results
pub type Result<T> = std::result::Result<T, AutotileError>;

impl From<image::ImageError> for AutotileError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for AutotileError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AutotileError {
    AutotileError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
