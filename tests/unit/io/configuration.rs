//! Tests for configuration constants and their relationships

#[cfg(test)]
mod tests {
    use mosaicwall::io::configuration::{
        DEFAULT_BORDER_PX, DEFAULT_CYCLES, DEFAULT_POOL_RATIO, FILL_THRESHOLD, JPEG_QUALITY,
        OUTPUT_EXTENSION, SECOND_HERO_THRESHOLD, SHORT_ID_LEN, SUPPORTED_EXTENSIONS,
        WALLPAPER_EXTENSIONS,
    };

    // Tests ratios stay inside the unit interval
    // Verified by setting the second hero threshold above the fill threshold
    #[test]
    fn test_ratios_in_unit_interval() {
        for ratio in [DEFAULT_POOL_RATIO, FILL_THRESHOLD, SECOND_HERO_THRESHOLD] {
            assert!(ratio > 0.0 && ratio <= 1.0, "{ratio}");
        }
        assert!(SECOND_HERO_THRESHOLD < FILL_THRESHOLD);
    }

    // Tests packing defaults
    // Verified by changing the default border
    #[test]
    fn test_packing_defaults() {
        assert_eq!(DEFAULT_BORDER_PX, 20);
        assert_eq!(DEFAULT_CYCLES, 1);
    }

    // Tests rendered files can always be picked up again by apply
    // Verified by rendering with an extension apply does not list
    #[test]
    fn test_output_extension_is_a_wallpaper_extension() {
        assert!(WALLPAPER_EXTENSIONS.contains(&OUTPUT_EXTENSION));
        assert!(
            WALLPAPER_EXTENSIONS
                .iter()
                .all(|ext| SUPPORTED_EXTENSIONS.contains(ext))
        );
    }

    // Tests extensions are stored lowercase
    // Verified by adding an uppercase extension
    #[test]
    fn test_extensions_lowercase() {
        for ext in SUPPORTED_EXTENSIONS {
            assert_eq!(*ext, ext.to_ascii_lowercase());
        }
    }

    // Tests export settings
    // Verified by setting the jpeg quality to zero
    #[test]
    fn test_export_settings() {
        assert!(JPEG_QUALITY > 0 && JPEG_QUALITY <= 100);
        assert_eq!(SHORT_ID_LEN, 8);
    }
}
