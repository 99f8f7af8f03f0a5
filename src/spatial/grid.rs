//! Grid of oriented tiles produced by assembly
//!
//! Cells borrow their tiles from the owning `TileSet`; a tile is never copied
//! into the grid.

use crate::io::error::{Result, assembly_error};
use crate::spatial::tiles::{Tile, TileId};
use crate::spatial::transform::{Edges, Transform};
use ndarray::Array2;

/// A tile together with the transform it is placed under
#[derive(Clone, Copy, Debug)]
pub struct OrientedTile<'a> {
    /// The placed tile
    pub tile: &'a Tile,
    /// Orientation of the tile within the grid
    pub transform: Transform,
}

impl<'a> OrientedTile<'a> {
    /// Pair a tile with a transform
    pub const fn new(tile: &'a Tile, transform: Transform) -> Self {
        Self { tile, transform }
    }

    /// Identifier of the placed tile
    pub const fn id(&self) -> TileId {
        self.tile.id()
    }

    /// Border fingerprints as placed
    pub fn edges(&self) -> Edges {
        self.tile.edges(self.transform)
    }

    /// Pixel at `(row, col)` as placed
    pub fn pixel(&self, row: usize, col: usize) -> bool {
        self.tile.pixel(self.transform, row, col)
    }

    /// Placed pixel grid
    pub fn pixels(&self) -> Array2<bool> {
        self.tile.oriented_pixels(self.transform)
    }
}

/// Square grid of oriented tiles, immutable once assembled
#[derive(Clone, Debug)]
pub struct AssembledGrid<'a> {
    cells: Array2<OrientedTile<'a>>,
}

impl<'a> AssembledGrid<'a> {
    /// Arrange cells given in row-major order into a `side` x `side` grid
    ///
    /// # Errors
    ///
    /// Returns an error if the number of cells is not `side * side`
    pub fn from_cells(side: usize, cells: Vec<OrientedTile<'a>>) -> Result<Self> {
        let count = cells.len();
        let cells = Array2::from_shape_vec((side, side), cells).map_err(|e| {
            assembly_error(&format!(
                "{count} placed tiles cannot fill a {side}x{side} grid: {e}"
            ))
        })?;
        Ok(Self { cells })
    }

    /// Number of tiles along each side
    pub fn side(&self) -> usize {
        self.cells.nrows()
    }

    /// Total number of placed tiles
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid holds no tiles
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Option<&OrientedTile<'a>> {
        self.cells.get((row, col))
    }

    /// Iterate cells with their `(row, col)` positions in row-major order
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &OrientedTile<'a>)> {
        self.cells.indexed_iter()
    }

    /// Pixel size of the placed tiles
    pub fn tile_size(&self) -> usize {
        self.cells.iter().next().map_or(0, |cell| cell.tile.size())
    }

    /// Tile ids laid out by grid position
    pub fn tile_ids(&self) -> Array2<TileId> {
        self.cells.map(OrientedTile::id)
    }

    /// Ids of the four corner cells: top-left, top-right, bottom-left, bottom-right
    ///
    /// A one-cell grid reports the same tile four times.
    pub fn corner_ids(&self) -> Option<[TileId; 4]> {
        let last = self.side().checked_sub(1)?;
        let id = |row: usize, col: usize| self.get(row, col).map(OrientedTile::id);
        Some([id(0, 0)?, id(0, last)?, id(last, 0)?, id(last, last)?])
    }
}
