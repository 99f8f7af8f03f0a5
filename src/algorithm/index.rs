//! Edge index mapping border fingerprints to the tiles that present them
//!
//! Each tile registers its four natural fingerprints and their reversals,
//! which together cover every fingerprint the tile shows under any of the
//! eight transforms.

use crate::io::configuration::MAX_BUCKET_IDS;
use crate::io::error::{MosaicError, Result};
use crate::spatial::tiles::{Fingerprint, Tile, TileId, TileSet};
use crate::spatial::transform::Transform;
use std::collections::HashMap;

/// Distinct tile ids sharing one fingerprint
///
/// A bucket holding one id is an outer border of the mosaic; a bucket holding
/// two ids is a seam between neighbours.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bucket {
    ids: [Option<TileId>; MAX_BUCKET_IDS],
}

impl Bucket {
    /// Number of distinct ids in the bucket
    pub fn len(&self) -> usize {
        self.ids.iter().flatten().count()
    }

    /// Whether the bucket holds no ids
    pub fn is_empty(&self) -> bool {
        self.ids.iter().all(Option::is_none)
    }

    /// Ids in insertion order
    pub fn ids(&self) -> impl Iterator<Item = TileId> + '_ {
        self.ids.iter().flatten().copied()
    }

    /// Whether the bucket holds `id`
    pub fn contains(&self, id: TileId) -> bool {
        self.ids().any(|other| other == id)
    }

    /// The id sharing this fingerprint with `id`, if any
    pub fn other(&self, id: TileId) -> Option<TileId> {
        self.ids().find(|&other| other != id)
    }

    // Returns false when the bucket is full and `id` is new
    fn insert(&mut self, id: TileId) -> bool {
        if self.contains(id) {
            return true;
        }
        match self.ids.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(id);
                true
            }
            None => false,
        }
    }
}

/// Lookup table from fingerprint to bucket
#[derive(Clone, Debug, Default)]
pub struct EdgeIndex {
    buckets: HashMap<Fingerprint, Bucket>,
}

impl EdgeIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index over every tile of a set
    ///
    /// # Errors
    ///
    /// Returns an error if any fingerprint is presented by more than two tiles
    pub fn build(tiles: &TileSet) -> Result<Self> {
        let mut index = Self::new();
        for tile in tiles {
            index.register(tile)?;
        }
        tracing::debug!(
            tiles = tiles.len(),
            buckets = index.len(),
            "edge index built"
        );
        Ok(index)
    }

    /// Insert a tile under all of its fingerprints
    ///
    /// The identity and the double mirror together yield each natural
    /// fingerprint and its reversal.
    ///
    /// # Errors
    ///
    /// Returns an error if a bucket would receive a third distinct tile
    pub fn register(&mut self, tile: &Tile) -> Result<()> {
        let double_mirror = Transform::from_toggles(false, true, true);
        for transform in [Transform::IDENTITY, double_mirror] {
            for fingerprint in tile.edges(transform).as_array() {
                self.insert(fingerprint, tile.id())?;
            }
        }
        Ok(())
    }

    fn insert(&mut self, fingerprint: Fingerprint, id: TileId) -> Result<()> {
        let bucket = self.buckets.entry(fingerprint).or_default();
        if bucket.insert(id) {
            Ok(())
        } else {
            Err(MosaicError::IndexInconsistency {
                fingerprint,
                tiles: bucket.ids().chain(std::iter::once(id)).collect(),
            })
        }
    }

    /// Tiles presenting a fingerprint (zero, one or two)
    pub fn lookup(&self, fingerprint: Fingerprint) -> Bucket {
        self.buckets.get(&fingerprint).copied().unwrap_or_default()
    }

    /// Whether exactly one tile presents the fingerprint
    pub fn is_unmatched(&self, fingerprint: Fingerprint) -> bool {
        self.lookup(fingerprint).len() == 1
    }

    /// Whether two tiles share the fingerprint
    pub fn is_seam(&self, fingerprint: Fingerprint) -> bool {
        self.lookup(fingerprint).len() == MAX_BUCKET_IDS
    }

    /// Number of distinct fingerprints indexed
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether nothing has been indexed
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Iterate fingerprints with their buckets in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (Fingerprint, Bucket)> + '_ {
        self.buckets.iter().map(|(&fingerprint, &bucket)| (fingerprint, bucket))
    }
}
