//! Corner, border and interior classification
//!
//! A tile's class follows from how many of its natural edges are seams: two
//! for a corner, three for a border tile, four for an interior tile.

use crate::algorithm::index::EdgeIndex;
use crate::io::configuration::CORNER_COUNT;
use crate::io::error::{Result, classification_error, computation_error};
use crate::spatial::tiles::{TileId, TileSet};
use std::fmt;

/// Position class of a tile within the mosaic
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileClass {
    /// Two matched edges
    Corner,
    /// Three matched edges
    Border,
    /// Four matched edges
    Interior,
}

impl TileClass {
    /// Class for a number of matched edges, if the count is valid
    pub const fn from_matched_edges(matched: usize) -> Option<Self> {
        match matched {
            2 => Some(Self::Corner),
            3 => Some(Self::Border),
            4 => Some(Self::Interior),
            _ => None,
        }
    }
}

impl fmt::Display for TileClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Corner => "corner",
            Self::Border => "border",
            Self::Interior => "interior",
        };
        f.write_str(name)
    }
}

/// Classification of every tile in a puzzle
#[derive(Clone, Debug)]
pub struct Topology {
    classes: Vec<(TileId, TileClass)>,
    corners: [TileId; CORNER_COUNT],
}

impl Topology {
    /// Corner tile ids in input order
    pub const fn corners(&self) -> [TileId; CORNER_COUNT] {
        self.corners
    }

    /// Class of a tile, if it was classified
    pub fn class_of(&self, id: TileId) -> Option<TileClass> {
        self.classes
            .iter()
            .find(|(tile, _)| *tile == id)
            .map(|&(_, class)| class)
    }

    /// Number of tiles in a class
    pub fn count(&self, class: TileClass) -> usize {
        self.classes.iter().filter(|(_, c)| *c == class).count()
    }

    /// Every classified tile in input order
    pub fn classes(&self) -> &[(TileId, TileClass)] {
        &self.classes
    }

    /// Product of the four corner ids
    ///
    /// # Errors
    ///
    /// Returns an error if the product overflows a `u64`
    pub fn corner_product(&self) -> Result<u64> {
        self.corners
            .iter()
            .try_fold(1_u64, |product, id| product.checked_mul(u64::from(id.0)))
            .ok_or_else(|| computation_error("corner_product", &"product overflows u64"))
    }
}

/// Classify every tile by its matched natural edges
///
/// # Errors
///
/// Returns an error if a tile has fewer than two matched edges or the puzzle
/// does not contain exactly four corners
pub fn classify(tiles: &TileSet, index: &EdgeIndex) -> Result<Topology> {
    let mut classes = Vec::with_capacity(tiles.len());
    let mut corners = Vec::with_capacity(CORNER_COUNT);

    for tile in tiles {
        let matched = tile
            .natural_edges()
            .as_array()
            .into_iter()
            .filter(|&fingerprint| index.is_seam(fingerprint))
            .count();
        let class = TileClass::from_matched_edges(matched).ok_or_else(|| {
            classification_error(&format!(
                "tile {} has {matched} matched edges, at least 2 are required",
                tile.id()
            ))
        })?;
        if class == TileClass::Corner {
            corners.push(tile.id());
        }
        classes.push((tile.id(), class));
    }

    let corners: [TileId; CORNER_COUNT] =
        corners.try_into().map_err(|rejected: Vec<TileId>| {
            classification_error(&format!(
                "found {} corner tiles, a square mosaic has exactly {CORNER_COUNT}",
                rejected.len()
            ))
        })?;

    tracing::debug!(
        corners = ?corners,
        tiles = classes.len(),
        "tiles classified"
    );

    Ok(Topology { classes, corners })
}
