//! Square photo mosaic reconstruction from scrambled, arbitrarily oriented tiles
//!
//! Tiles are matched by their border fingerprints, oriented within one shared
//! coordinate frame, assembled into a grid, stitched into a single bitmap and
//! finally scanned for a repeating motif under all eight square symmetries.

/// Edge indexing, classification, assembly, compositing and motif scanning
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Tiles, symmetry transforms, bitmaps and assembled grids
pub mod spatial;

pub use io::error::{MosaicError, Result};
