//! End-to-end reconstruction driver
//!
//! Runs index build, classification, assembly, compositing and scanning as
//! one deterministic pass. Each stage is built once by a single writer and
//! then only read by the stages after it.

use crate::algorithm::assembly::GridAssembler;
use crate::algorithm::compositor::composite;
use crate::algorithm::index::EdgeIndex;
use crate::algorithm::scanner::{Motif, MotifScanner, roughness};
use crate::algorithm::topology::classify;
use crate::io::configuration::CORNER_COUNT;
use crate::io::error::Result;
use crate::spatial::bitmap::Bitmap;
use crate::spatial::tiles::{TileId, TileSet};
use crate::spatial::transform::Transform;
use std::collections::HashSet;
use std::fmt;

/// Reconstruction stages in execution order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Building the edge index
    Indexing,
    /// Classifying corner, border and interior tiles
    Classifying,
    /// Walking the grid
    Assembling,
    /// Stitching the composite image
    Compositing,
    /// Searching for the motif
    Scanning,
}

impl Stage {
    /// All stages in execution order
    pub const ALL: [Self; 5] = [
        Self::Indexing,
        Self::Classifying,
        Self::Assembling,
        Self::Compositing,
        Self::Scanning,
    ];

    /// Zero-based position in execution order
    pub const fn position(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Indexing => "indexing edges",
            Self::Classifying => "classifying tiles",
            Self::Assembling => "assembling grid",
            Self::Compositing => "compositing image",
            Self::Scanning => "scanning for motif",
        };
        f.write_str(name)
    }
}

/// The two puzzle answers and the facts they were derived from
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Product of the four corner tile ids
    pub corner_product: u64,
    /// On pixels not attributed to a motif occurrence
    pub roughness: usize,
    /// Corner tile ids in input order
    pub corners: [TileId; CORNER_COUNT],
    /// Number of tiles along each side of the mosaic
    pub side: usize,
    /// Orientation in which the motif was found, if it was found
    pub motif_orientation: Option<Transform>,
    /// Number of motif occurrences
    pub motif_count: usize,
}

/// A solution together with the reconstructed image
#[derive(Clone, Debug)]
pub struct Reconstruction {
    /// Puzzle answers
    pub solution: Solution,
    /// Composite image in assembly orientation
    pub composite: Bitmap,
    /// Composite pixels covered by motif occurrences
    pub motif_pixels: HashSet<(usize, usize)>,
}

/// Reconstruction pipeline for a fixed motif
#[derive(Clone, Copy, Debug)]
pub struct Pipeline<'a> {
    motif: &'a Motif,
}

impl<'a> Pipeline<'a> {
    /// Create a pipeline searching for `motif`
    pub const fn new(motif: &'a Motif) -> Self {
        Self { motif }
    }

    /// Solve a puzzle, returning only the answers
    ///
    /// # Errors
    ///
    /// Returns an error if the tiles do not form a unique, consistent, square
    /// mosaic
    pub fn run(&self, tiles: &TileSet) -> Result<Solution> {
        Ok(self.reconstruct(tiles, |_| {})?.solution)
    }

    /// Solve a puzzle, reporting each stage before it starts
    ///
    /// # Errors
    ///
    /// Returns an error if the tiles do not form a unique, consistent, square
    /// mosaic
    pub fn reconstruct<F>(&self, tiles: &TileSet, mut on_stage: F) -> Result<Reconstruction>
    where
        F: FnMut(Stage),
    {
        let span = tracing::info_span!("reconstruct", tiles = tiles.len());
        let _guard = span.enter();

        on_stage(Stage::Indexing);
        let index = EdgeIndex::build(tiles)?;

        on_stage(Stage::Classifying);
        let topology = classify(tiles, &index)?;
        let corner_product = topology.corner_product()?;

        on_stage(Stage::Assembling);
        let grid = GridAssembler::new(tiles, &index).assemble(&topology)?;

        on_stage(Stage::Compositing);
        let image = composite(&grid);

        on_stage(Stage::Scanning);
        let scan = MotifScanner::new(self.motif).scan(&image);
        let roughness = roughness(&image, self.motif, scan.as_ref())?;
        let motif_pixels = scan
            .as_ref()
            .map(|result| result.covered_pixels(self.motif, image.side()))
            .unwrap_or_default();

        let solution = Solution {
            corner_product,
            roughness,
            corners: topology.corners(),
            side: grid.side(),
            motif_orientation: scan.as_ref().map(|result| result.transform),
            motif_count: scan.as_ref().map_or(0, |result| result.count()),
        };
        tracing::info!(
            corner_product,
            roughness,
            motifs = solution.motif_count,
            "reconstruction complete"
        );

        Ok(Reconstruction {
            solution,
            composite: image,
            motif_pixels,
        })
    }
}
