//! Stitching of tile interiors into the composite image
//!
//! Each placed tile loses its outer ring of pixels, which duplicates the
//! border of its neighbour, and the remaining interior block is copied into
//! the composite at its grid position.

use crate::spatial::bitmap::Bitmap;
use crate::spatial::grid::{AssembledGrid, OrientedTile};
use ndarray::{Array2, s};

/// Interior pixels of a placed tile, border ring removed
pub fn oriented_interior(cell: &OrientedTile<'_>) -> Array2<bool> {
    let pixels = cell.pixels();
    let size = pixels.nrows();
    if size < 2 {
        return Array2::from_elem((0, 0), false);
    }
    pixels.slice(s![1..size - 1, 1..size - 1]).to_owned()
}

/// Build the composite image from an assembled grid
pub fn composite(grid: &AssembledGrid<'_>) -> Bitmap {
    let interior = grid.tile_size().saturating_sub(2);
    let mut image = Bitmap::new(grid.side() * interior);

    for ((grid_row, grid_col), cell) in grid.iter() {
        let block = oriented_interior(cell);
        for ((row, col), &on) in block.indexed_iter() {
            image.set(grid_row * interior + row, grid_col * interior + col, on);
        }
    }

    tracing::debug!(
        side = image.side(),
        on_pixels = image.count_ones(),
        "composite image built"
    );
    image
}
