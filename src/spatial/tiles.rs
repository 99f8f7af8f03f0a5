//! Tile storage and border fingerprints
//!
//! A tile is an immutable square pixel grid with a stable identifier. Its
//! border fingerprints under all eight symmetry transforms are derived once
//! at construction and cached alongside the pixels.

use crate::io::configuration::{MAX_TILE_SIZE, MIN_TILE_SIZE};
use crate::io::error::{MosaicError, Result};
use crate::spatial::transform::{Edges, Transform};
use ndarray::{Array2, ArrayView1};
use std::collections::HashMap;
use std::fmt;

/// Stable numeric tile identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileId(pub u32);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One border read as a bit vector, first pixel in the most significant bit
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fingerprint(u32);

impl Fingerprint {
    /// Wrap a raw border value
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Raw border value
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Read pixels in order into a fingerprint
    pub fn from_pixels<I: IntoIterator<Item = bool>>(pixels: I) -> Self {
        Self(
            pixels
                .into_iter()
                .fold(0, |value, on| (value << 1) | u32::from(on)),
        )
    }

    /// The same border read in the opposite direction
    ///
    /// Only the low `width` bits take part in the reversal.
    #[must_use]
    pub const fn reversed(self, width: u32) -> Self {
        if width == 0 || width > u32::BITS {
            return self;
        }
        Self(self.0.reverse_bits() >> (u32::BITS - width))
    }

    /// Whether the border reads the same in both directions
    pub const fn is_palindrome(self, width: u32) -> bool {
        self.reversed(width).0 == self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

fn natural_edges(pixels: &Array2<bool>) -> Edges {
    let last = pixels.nrows().saturating_sub(1);
    let read = |line: ArrayView1<'_, bool>| Fingerprint::from_pixels(line.iter().copied());
    Edges {
        top: read(pixels.row(0)),
        right: read(pixels.column(last)),
        bottom: read(pixels.row(last)),
        left: read(pixels.column(0)),
    }
}

/// A square tile with cached fingerprints for every orientation
#[derive(Clone, Debug)]
pub struct Tile {
    id: TileId,
    pixels: Array2<bool>,
    fingerprints: [Edges; 8],
}

impl Tile {
    /// Create a tile from its pixel grid
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is not square or its size lies outside
    /// the supported range
    pub fn new(id: TileId, pixels: Array2<bool>) -> Result<Self> {
        let (rows, cols) = pixels.dim();
        if rows != cols {
            return Err(MosaicError::InvalidTile {
                tile: Some(id),
                reason: format!("pixel grid is {rows}x{cols}, tiles must be square"),
            });
        }
        if !(MIN_TILE_SIZE..=MAX_TILE_SIZE).contains(&rows) {
            return Err(MosaicError::InvalidTile {
                tile: Some(id),
                reason: format!(
                    "size {rows} is outside the supported range {MIN_TILE_SIZE}..={MAX_TILE_SIZE}"
                ),
            });
        }

        let natural = natural_edges(&pixels);
        let width = rows as u32;
        let fingerprints = Transform::ALL.map(|transform| transform.apply_edges(natural, width));

        Ok(Self {
            id,
            pixels,
            fingerprints,
        })
    }

    /// Tile identifier
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// Side length in pixels
    pub fn size(&self) -> usize {
        self.pixels.nrows()
    }

    /// Raw pixel grid in the natural orientation
    pub const fn pixels(&self) -> &Array2<bool> {
        &self.pixels
    }

    /// Border fingerprints under a transform
    pub fn edges(&self, transform: Transform) -> Edges {
        self.fingerprints
            .get(transform.index())
            .copied()
            .unwrap_or_else(|| transform.apply_edges(natural_edges(&self.pixels), self.size() as u32))
    }

    /// Border fingerprints in the natural orientation
    pub fn natural_edges(&self) -> Edges {
        self.edges(Transform::IDENTITY)
    }

    /// Pixel at `(row, col)` when the tile is viewed under a transform
    pub fn pixel(&self, transform: Transform, row: usize, col: usize) -> bool {
        let source = transform.source_coord(row, col, self.size());
        self.pixels.get(source).copied().unwrap_or(false)
    }

    /// Transformed copy of the pixel grid
    pub fn oriented_pixels(&self, transform: Transform) -> Array2<bool> {
        transform.apply_grid(&self.pixels)
    }
}

/// All tiles of one puzzle, addressable by id
///
/// Tiles keep their input order, which fixes the choice of anchor corner
/// during assembly.
#[derive(Clone, Debug)]
pub struct TileSet {
    tiles: Vec<Tile>,
    positions: HashMap<TileId, usize>,
    tile_size: usize,
}

impl TileSet {
    /// Collect tiles into a set
    ///
    /// # Errors
    ///
    /// Returns an error if the set is empty, tiles differ in size, or an id
    /// appears twice
    pub fn new(tiles: Vec<Tile>) -> Result<Self> {
        let tile_size = tiles.first().map(Tile::size).ok_or_else(|| MosaicError::InvalidTile {
            tile: None,
            reason: "no tiles supplied".to_string(),
        })?;

        let mut positions = HashMap::with_capacity(tiles.len());
        for (position, tile) in tiles.iter().enumerate() {
            if tile.size() != tile_size {
                return Err(MosaicError::InvalidTile {
                    tile: Some(tile.id()),
                    reason: format!(
                        "size {} differs from the puzzle tile size {tile_size}",
                        tile.size()
                    ),
                });
            }
            if positions.insert(tile.id(), position).is_some() {
                return Err(MosaicError::InvalidTile {
                    tile: Some(tile.id()),
                    reason: "id appears more than once".to_string(),
                });
            }
        }

        Ok(Self {
            tiles,
            positions,
            tile_size,
        })
    }

    /// Look up a tile by id
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.positions
            .get(&id)
            .and_then(|&position| self.tiles.get(position))
    }

    /// Tiles in input order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Iterate tiles in input order
    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    /// Number of tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the set holds no tiles (never true for a constructed set)
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Shared side length of every tile
    pub const fn tile_size(&self) -> usize {
        self.tile_size
    }

    /// Consume the set, returning the tiles in input order
    pub fn into_tiles(self) -> Vec<Tile> {
        self.tiles
    }
}

impl<'a> IntoIterator for &'a TileSet {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}
