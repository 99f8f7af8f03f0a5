//! Reconstruction constants and runtime configuration defaults

// Tile geometry limits
/// Smallest accepted tile size (a tile must keep a non-empty interior)
pub const MIN_TILE_SIZE: usize = 3;
/// Largest accepted tile size (a border must fit in a 32-bit fingerprint)
pub const MAX_TILE_SIZE: usize = 32;

// A valid tiling never shares a border between more than two tiles
/// Maximum distinct tile ids per edge bucket
pub const MAX_BUCKET_IDS: usize = 2;

/// Number of corner tiles in a square mosaic
pub const CORNER_COUNT: usize = 4;

// Text glyphs
/// Glyph for a pixel that is on
pub const GLYPH_ON: char = '#';
/// Glyph for a pixel that is off
pub const GLYPH_OFF: char = '.';
/// Prefix of every tile header line
pub const TILE_HEADER_PREFIX: &str = "Tile ";

/// The built-in motif searched for in the composite image
///
/// `#` marks a required pixel, any other character is ignored.
pub const SEA_MONSTER: [&str; 3] = [
    "                  # ",
    "#    ##    ##    ###",
    " #  #  #  #  #  #   ",
];

// Synthetic puzzle generation
/// Probability that a generated interior pixel is on
pub const GENERATED_PIXEL_DENSITY: f64 = 0.5;
/// Smallest generated tile id
pub const GENERATED_ID_BASE: u32 = 1000;
/// Number of distinct ids available to the generator
pub const GENERATED_ID_RANGE: usize = 9000;

// Batch processing
/// File extension of puzzle files picked up from a directory
pub const PUZZLE_EXTENSION: &str = "txt";
/// Suffix added to exported image filenames
pub const OUTPUT_SUFFIX: &str = "_mosaic";

// Progress bar display settings
/// Threshold above which a batch progress bar is shown
pub const BATCH_PROGRESS_THRESHOLD: usize = 5;

// Export palette (RGBA)
/// Colour of pixels that are on
pub const PIXEL_ON_COLOR: [u8; 4] = [20, 60, 140, 255];
/// Colour of pixels that are off
pub const PIXEL_OFF_COLOR: [u8; 4] = [235, 240, 245, 255];
/// Colour of pixels covered by a motif occurrence
pub const MOTIF_COLOR: [u8; 4] = [230, 90, 30, 255];
