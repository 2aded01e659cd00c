//! Compositor constants and runtime configuration defaults

// Mask rasterisation
/// Linear supersampling factor used when rasterising shape masks
pub const MASK_SUPERSAMPLE: u32 = 3;

// Canvas backgrounds
/// Background of strip, recursive grid and equilateral canvases
pub const STRIP_BACKGROUND: [u8; 3] = [100, 255, 255];
/// Background of triangular tiling canvases
pub const TRIANGLE_BACKGROUND: [u8; 3] = [255, 255, 255];

// Batch defaults
/// Number of collages produced per invocation
pub const DEFAULT_COLLAGE_COUNT: usize = 10;
/// Smallest tile edge length drawn for a collage
pub const DEFAULT_MIN_PIXELS: u32 = 50;
/// Largest tile edge length drawn for a collage
pub const DEFAULT_MAX_PIXELS: u32 = 100;
/// Minimum accepted source height
pub const DEFAULT_MIN_HEIGHT: u32 = 0;
/// Minimum accepted source width
pub const DEFAULT_MIN_WIDTH: u32 = 0;
/// Source images combined into each collage
pub const SOURCES_PER_COLLAGE: usize = 2;

// Prevents spinning forever on a directory of unreadable or undersized files
/// Maximum files tried when acquiring a single source image
pub const MAX_SOURCE_ATTEMPTS: usize = 64;

/// File extensions recognised as source images (compared case-insensitively)
pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "tif", "tiff", "gif"];

// Output settings
/// Prefix of generated collage filenames
pub const OUTPUT_PREFIX: &str = "collage_";
/// Extension of generated still collages
pub const OUTPUT_EXTENSION: &str = "jpg";
/// Extension of generated animations
pub const ANIMATION_EXTENSION: &str = "gif";

// Animation settings
/// Number of times an exported animation repeats
pub const ANIMATION_LOOPS: u16 = 10;
/// Delay between animation frames
pub const FRAME_DELAY_MS: u32 = 100;
