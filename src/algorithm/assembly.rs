//! Grid walk that places and orients every tile exactly once
//!
//! Assembly starts from the first corner, oriented as the top-left tile, and
//! fills the grid row by row. Each row is extended rightward across shared
//! seams, and the first tile of the next row is found by walking down from
//! the first tile of the current one.

use crate::algorithm::index::EdgeIndex;
use crate::algorithm::orientation::OrientationResolver;
use crate::algorithm::topology::Topology;
use crate::io::error::{Result, assembly_error};
use crate::spatial::grid::{AssembledGrid, OrientedTile};
use crate::spatial::tiles::TileSet;
use crate::spatial::transform::EdgeSlot;
use std::collections::HashSet;

/// Places tiles into a square grid using the edge index
pub struct GridAssembler<'a> {
    tiles: &'a TileSet,
    index: &'a EdgeIndex,
    resolver: OrientationResolver<'a>,
}

impl<'a> GridAssembler<'a> {
    /// Create an assembler over a tile set and its index
    pub const fn new(tiles: &'a TileSet, index: &'a EdgeIndex) -> Self {
        Self {
            tiles,
            index,
            resolver: OrientationResolver::new(index),
        }
    }

    /// Assemble the full grid
    ///
    /// # Errors
    ///
    /// Returns an error if a corner cannot be oriented, a neighbour is
    /// ambiguous, the walk falls off an edge early, or the placed tiles do not
    /// form a consistent square
    pub fn assemble(&self, topology: &Topology) -> Result<AssembledGrid<'a>> {
        let [anchor_id, ..] = topology.corners();
        let anchor = self
            .tiles
            .get(anchor_id)
            .ok_or_else(|| assembly_error(&format!("corner tile {anchor_id} is not in the tile set")))?;
        let top_left = OrientedTile::new(anchor, self.resolver.orient_as_top_left(anchor)?);
        tracing::debug!(tile = %anchor_id, transform = %top_left.transform, "anchored top-left corner");

        let side = self.row_length(top_left)?;
        if side * side != self.tiles.len() {
            return Err(assembly_error(&format!(
                "top row holds {side} tiles, which cannot square {} tiles",
                self.tiles.len()
            )));
        }

        let mut cells = Vec::with_capacity(self.tiles.len());
        let mut row_start = Some(top_left);
        for row in 0..side {
            let first = row_start
                .ok_or_else(|| assembly_error(&format!("fell off bottom before row {row}")))?;
            let mut current = Some(first);
            for col in 0..side {
                let cell = current.ok_or_else(|| {
                    assembly_error(&format!("fell off right at row {row}, column {col}"))
                })?;
                cells.push(cell);
                current = if col + 1 < side {
                    self.next_right(&cell)?
                } else {
                    None
                };
            }
            row_start = if row + 1 < side {
                self.next_down(&first)?
            } else {
                None
            };
            tracing::trace!(row, "row placed");
        }

        let grid = AssembledGrid::from_cells(side, cells)?;
        verify_seams(&grid, self.index)?;
        tracing::debug!(side, "grid assembled");
        Ok(grid)
    }

    /// The tile placed to the right of `from`, or `None` at the right border
    ///
    /// # Errors
    ///
    /// Returns an error if the neighbour is missing or cannot be oriented
    pub fn next_right(&self, from: &OrientedTile<'a>) -> Result<Option<OrientedTile<'a>>> {
        self.step(from, EdgeSlot::Right)
    }

    /// The tile placed below `from`, or `None` at the bottom border
    ///
    /// # Errors
    ///
    /// Returns an error if the neighbour is missing or cannot be oriented
    pub fn next_down(&self, from: &OrientedTile<'a>) -> Result<Option<OrientedTile<'a>>> {
        self.step(from, EdgeSlot::Bottom)
    }

    fn step(&self, from: &OrientedTile<'a>, slot: EdgeSlot) -> Result<Option<OrientedTile<'a>>> {
        let seam = from.edges().get(slot);
        let bucket = self.index.lookup(seam);
        if bucket.len() < 2 {
            return Ok(None);
        }
        let neighbour_id = bucket.other(from.id()).ok_or_else(|| {
            assembly_error(&format!(
                "seam {seam} on tile {} does not list the tile itself",
                from.id()
            ))
        })?;
        let neighbour = self.tiles.get(neighbour_id).ok_or_else(|| {
            assembly_error(&format!("neighbour tile {neighbour_id} is not in the tile set"))
        })?;
        let transform = self
            .resolver
            .orient_to_match(neighbour, slot.opposite(), seam)?;
        Ok(Some(OrientedTile::new(neighbour, transform)))
    }

    fn row_length(&self, start: OrientedTile<'a>) -> Result<usize> {
        let mut length = 1;
        let mut current = start;
        while let Some(next) = self.next_right(&current)? {
            length += 1;
            if length > self.tiles.len() {
                return Err(assembly_error(&"walk along the top row does not terminate"));
            }
            current = next;
        }
        Ok(length)
    }
}

/// Check that an assembled grid is internally consistent
///
/// Every tile appears once, neighbouring cells share their seam fingerprint,
/// and every edge on the outer ring of the grid is unmatched.
///
/// # Errors
///
/// Returns an error describing the first inconsistency found
pub fn verify_seams(grid: &AssembledGrid<'_>, index: &EdgeIndex) -> Result<()> {
    let side = grid.side();
    let mut placed = HashSet::with_capacity(grid.len());

    for ((row, col), cell) in grid.iter() {
        if !placed.insert(cell.id()) {
            return Err(assembly_error(&format!(
                "tile {} is placed more than once",
                cell.id()
            )));
        }
        let edges = cell.edges();

        if row == 0 && !index.is_unmatched(edges.top) {
            return Err(assembly_error(&format!(
                "top edge of ({row}, {col}) is matched but lies on the outer border"
            )));
        }
        if col == 0 && !index.is_unmatched(edges.left) {
            return Err(assembly_error(&format!(
                "left edge of ({row}, {col}) is matched but lies on the outer border"
            )));
        }

        match grid.get(row, col + 1) {
            Some(right) if right.edges().left != edges.right => {
                return Err(assembly_error(&format!(
                    "seam between ({row}, {col}) and ({row}, {}) does not match",
                    col + 1
                )));
            }
            None if !index.is_unmatched(edges.right) => {
                return Err(assembly_error(&format!(
                    "row {row} overruns the right border at column {col}"
                )));
            }
            _ => {}
        }

        match grid.get(row + 1, col) {
            Some(below) if below.edges().top != edges.bottom => {
                return Err(assembly_error(&format!(
                    "seam between ({row}, {col}) and ({}, {col}) does not match",
                    row + 1
                )));
            }
            None if !index.is_unmatched(edges.bottom) => {
                return Err(assembly_error(&format!(
                    "column {col} overruns the bottom border at row {row}"
                )));
            }
            _ => {}
        }
    }

    if placed.len() != side * side {
        return Err(assembly_error(&format!(
            "{} tiles placed in a {side}x{side} grid",
            placed.len()
        )));
    }
    Ok(())
}
