//! Engine constants and runtime configuration defaults

// Packing heuristics
/// Default gap between adjacent images in pixels
pub const DEFAULT_BORDER_PX: u32 = 20;
/// Default fraction of the remaining catalog drawn into one pool
pub const DEFAULT_POOL_RATIO: f64 = 0.2;
/// Fraction of canvas width after which a canvas stops drawing new pools
pub const FILL_THRESHOLD: f64 = 0.9;
/// A first hero narrower than this fraction of the row gets a second hero
pub const SECOND_HERO_THRESHOLD: f64 = 0.5;

// Catalog and output locations
/// Directory holding the ingested image catalog
pub const DEFAULT_IMAGES_DIR: &str = "images";
/// Directory receiving one subdirectory of rendered canvases per output
pub const DEFAULT_OUTPUT_DIR: &str = "output";
/// File extensions accepted into the catalog (lowercase)
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "tiff", "tif", "bmp", "webp"];
/// File extensions considered when picking a rendered wallpaper (lowercase)
pub const WALLPAPER_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

// Rendering
/// Canvas fill colour behind and between images
pub const DEFAULT_BACKGROUND: [u8; 3] = [0, 0, 0];
/// JPEG quality of rendered canvases
pub const JPEG_QUALITY: u8 = 95;
/// Extension of rendered canvases
pub const OUTPUT_EXTENSION: &str = "jpg";
/// Hex characters of the random suffix in rendered file names
pub const SHORT_ID_LEN: usize = 8;

// Progress bar display settings
/// Above this many outputs a single aggregate bar is shown
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

/// Default number of generation cycles
pub const DEFAULT_CYCLES: usize = 1;
