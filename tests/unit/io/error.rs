//! Tests for error display formatting and conversions

#[cfg(test)]
mod tests {
    use autosheet::AutotileError;
    use autosheet::io::error::invalid_parameter;
    use std::error::Error;
    use std::path::PathBuf;

    // Tests the scheme error names both accepted spellings
    // Verified by removing the accepted values from the message
    #[test]
    fn test_invalid_scheme_display() {
        let error = AutotileError::InvalidScheme {
            value: "hex6".to_string(),
        };
        let message = error.to_string();

        assert!(message.contains("hex6"));
        assert!(message.contains("basic4"));
        assert!(message.contains("blob8"));
    }

    // Tests the tile size error carries value and reason
    // Verified by formatting the reason without the value
    #[test]
    fn test_invalid_tile_size_display() {
        let error = AutotileError::InvalidTileSize {
            value: 0,
            reason: "tile size must be positive",
        };
        let message = error.to_string();

        assert!(message.contains('0'));
        assert!(message.contains("positive"));
    }

    // Tests the malformed asset error names the role
    // Verified by omitting the role from the message
    #[test]
    fn test_malformed_asset_display() {
        let error = AutotileError::MalformedAsset {
            role: "edge-left",
            reason: "raster has zero dimension (0x0)".to_string(),
        };
        let message = error.to_string();

        assert!(message.contains("edge-left"));
        assert!(message.contains("zero dimension"));
    }

    // Tests the helper constructor for parameter errors
    // Verified by swapping the value and reason fields
    #[test]
    fn test_invalid_parameter_helper() {
        let error = invalid_parameter("columns", &0, &"at least one column required");

        match error {
            AutotileError::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                assert_eq!(parameter, "columns");
                assert_eq!(value, "0");
                assert_eq!(reason, "at least one column required");
            }
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    // Tests I/O errors convert with an unknown-path placeholder
    // Verified by panicking in the From implementation
    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::other("disk on fire");
        let error = AutotileError::from(io_error);

        match &error {
            AutotileError::FileSystem { path, .. } => {
                assert_eq!(path, &PathBuf::from("<unknown>"));
            }
            other => panic!("expected FileSystem, got {other:?}"),
        }
        assert!(error.source().is_some());
    }

    // Tests purely computational errors expose no source
    // Verified by returning self as the source
    #[test]
    fn test_computational_errors_have_no_source() {
        assert!(AutotileError::MissingAllSources.source().is_none());
        let error = AutotileError::InvalidScheme {
            value: String::new(),
        };
        assert!(error.source().is_none());
    }
}
