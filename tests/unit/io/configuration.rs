//! Tests for composition constants and their cross-module consistency

#[cfg(test)]
mod tests {
    use autosheet::io::configuration::{
        BASIC4_COLUMNS, BASIC4_TILE_COUNT, BLOB8_COLUMNS, BLOB8_TILE_COUNT, DEFAULT_OUTPUT,
        DEFAULT_TILE_SIZE, MAX_TILE_SIZE,
    };
    use autosheet::mask::{Scheme, enumerate};

    // Tests the scheme-fixed tile counts and column layouts
    // Verified by changing constant values
    #[test]
    fn test_scheme_constants() {
        assert_eq!(BASIC4_TILE_COUNT, 16);
        assert_eq!(BLOB8_TILE_COUNT, 47);
        assert_eq!(BASIC4_COLUMNS, 4);
        assert_eq!(BLOB8_COLUMNS, 8);
    }

    // Tests the regression constants agree with actual enumeration
    // Verified by tightening the blob diagonal constraint
    #[test]
    fn test_counts_match_enumeration() {
        assert_eq!(enumerate(Scheme::Basic4).len(), BASIC4_TILE_COUNT);
        assert_eq!(enumerate(Scheme::Blob8).len(), BLOB8_TILE_COUNT);
    }

    // Tests default and limit values for tile size
    // Verified by reducing the allocation guard
    #[test]
    fn test_tile_size_defaults() {
        assert_eq!(DEFAULT_TILE_SIZE, 64);
        assert_eq!(MAX_TILE_SIZE, 4096);
        assert!(DEFAULT_TILE_SIZE < MAX_TILE_SIZE);
    }

    // Tests the default output name matches the original download name
    // Verified by changing the output extension
    #[test]
    fn test_default_output_name() {
        assert_eq!(DEFAULT_OUTPUT, "autotile_set.png");
    }
}
