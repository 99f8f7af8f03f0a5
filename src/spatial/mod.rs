//! Spatial data structures for tiles and the reconstructed mosaic
//!
//! This module contains spatial-related functionality including:
//! - The eight symmetry transforms of a square
//! - Tiles and their cached border fingerprints
//! - The composite bitmap and the grid of oriented tiles
//! - Synthetic puzzle generation

/// Composite image storage
pub mod bitmap;
/// Random puzzle generation for tests and benchmarks
pub mod generator;
/// Assembled grid of oriented tiles
pub mod grid;
/// Tile storage and edge fingerprints
pub mod tiles;
/// Dihedral symmetry transforms
pub mod transform;

pub use bitmap::Bitmap;
pub use grid::{AssembledGrid, OrientedTile};
pub use tiles::{Fingerprint, Tile, TileId, TileSet};
pub use transform::{EdgeSlot, Edges, Transform};
