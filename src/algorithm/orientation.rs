//! Orientation search under adjacency constraints

use crate::algorithm::index::EdgeIndex;
use crate::io::error::{MosaicError, Result};
use crate::spatial::tiles::{Fingerprint, Tile};
use crate::spatial::transform::{EdgeSlot, Transform};

/// Finds the transform placing a tile consistently with its neighbours
#[derive(Clone, Copy, Debug)]
pub struct OrientationResolver<'a> {
    index: &'a EdgeIndex,
}

impl<'a> OrientationResolver<'a> {
    /// Create a resolver backed by an edge index
    pub const fn new(index: &'a EdgeIndex) -> Self {
        Self { index }
    }

    /// Orient a corner tile so its top and left edges are both unmatched
    ///
    /// Transforms are tried in enumeration order and the first fit wins.
    ///
    /// # Errors
    ///
    /// Returns an error if no transform leaves both edges unmatched
    pub fn orient_as_top_left(&self, tile: &Tile) -> Result<Transform> {
        Transform::ALL
            .into_iter()
            .find(|&transform| {
                let edges = tile.edges(transform);
                self.index.is_unmatched(edges.top) && self.index.is_unmatched(edges.left)
            })
            .ok_or_else(|| MosaicError::OrientationAmbiguity {
                tile: tile.id(),
                requirement: "top and left edges unmatched".to_string(),
                matches: 0,
            })
    }

    /// Orient a tile so the fingerprint in `slot` equals `required`
    ///
    /// # Errors
    ///
    /// Returns an error unless exactly one transform satisfies the match
    pub fn orient_to_match(
        &self,
        tile: &Tile,
        slot: EdgeSlot,
        required: Fingerprint,
    ) -> Result<Transform> {
        let matching: Vec<Transform> = Transform::ALL
            .into_iter()
            .filter(|&transform| tile.edges(transform).get(slot) == required)
            .collect();
        match matching.as_slice() {
            [transform] => Ok(*transform),
            _ => Err(MosaicError::OrientationAmbiguity {
                tile: tile.id(),
                requirement: format!("{slot} edge = {required}"),
                matches: matching.len(),
            }),
        }
    }
}
