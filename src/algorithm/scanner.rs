//! Motif search over the composite image under all eight symmetries
//!
//! The composite is never rotated in memory: each orientation is scanned by
//! mapping window coordinates back into the stored image.

use crate::io::configuration::{GLYPH_ON, SEA_MONSTER};
use crate::io::error::{Result, computation_error, parse_error};
use crate::spatial::bitmap::Bitmap;
use crate::spatial::transform::Transform;
use std::collections::HashSet;

/// A small pixel pattern given as the offsets that must be on
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Motif {
    offsets: Vec<(usize, usize)>,
    height: usize,
    width: usize,
}

impl Motif {
    fn from_offsets(offsets: Vec<(usize, usize)>) -> Self {
        // Anchor the tight bounding box at the origin
        let top = offsets.iter().map(|&(row, _)| row).min().unwrap_or(0);
        let left = offsets.iter().map(|&(_, col)| col).min().unwrap_or(0);
        let mut offsets: Vec<(usize, usize)> = offsets
            .into_iter()
            .map(|(row, col)| (row - top, col - left))
            .collect();
        offsets.sort_unstable();
        offsets.dedup();
        let height = offsets.iter().map(|&(row, _)| row + 1).max().unwrap_or(0);
        let width = offsets.iter().map(|&(_, col)| col + 1).max().unwrap_or(0);
        Self {
            offsets,
            height,
            width,
        }
    }

    /// Create a motif from required `(row, col)` offsets
    ///
    /// # Errors
    ///
    /// Returns an error if no offsets are given
    pub fn new(offsets: Vec<(usize, usize)>) -> Result<Self> {
        if offsets.is_empty() {
            return Err(computation_error("motif", &"a motif needs at least one pixel"));
        }
        Ok(Self::from_offsets(offsets))
    }

    /// Parse a motif drawn with `#` for required pixels
    ///
    /// Any other character is a "don't care" position. Rows may differ in
    /// length, and blank leading rows or columns are trimmed.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern contains no `#`
    pub fn from_pattern(pattern: &str) -> Result<Self> {
        let offsets: Vec<(usize, usize)> = pattern
            .lines()
            .enumerate()
            .flat_map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .filter(|&(_, glyph)| glyph == GLYPH_ON)
                    .map(move |(col, _)| (row, col))
            })
            .collect();
        if offsets.is_empty() {
            return Err(parse_error(1, &format!("motif contains no `{GLYPH_ON}` pixels")));
        }
        Ok(Self::from_offsets(offsets))
    }

    /// The built-in sea monster
    pub fn sea_monster() -> Self {
        Self::from_offsets(
            SEA_MONSTER
                .iter()
                .enumerate()
                .flat_map(|(row, line)| {
                    line.chars()
                        .enumerate()
                        .filter(|&(_, glyph)| glyph == GLYPH_ON)
                        .map(move |(col, _)| (row, col))
                })
                .collect(),
        )
    }

    /// Required offsets in row-major order
    pub fn offsets(&self) -> &[(usize, usize)] {
        &self.offsets
    }

    /// Number of required pixels
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the motif has no required pixels
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Bounding box height
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Bounding box width
    pub const fn width(&self) -> usize {
        self.width
    }
}

/// Motif occurrences found in one orientation of the composite
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanResult {
    /// Orientation under which the occurrences were found
    pub transform: Transform,
    /// Top-left corner of each occurrence, in transformed coordinates
    pub occurrences: Vec<(usize, usize)>,
}

impl ScanResult {
    /// Number of occurrences
    pub fn count(&self) -> usize {
        self.occurrences.len()
    }

    /// Composite pixels covered by any occurrence, in stored coordinates
    pub fn covered_pixels(&self, motif: &Motif, side: usize) -> HashSet<(usize, usize)> {
        self.occurrences
            .iter()
            .flat_map(|&(row, col)| {
                motif.offsets().iter().map(move |&(dr, dc)| {
                    self.transform.source_coord(row + dr, col + dc, side)
                })
            })
            .collect()
    }

    /// Whether any two occurrences share a pixel
    pub fn has_overlap(&self, motif: &Motif, side: usize) -> bool {
        self.covered_pixels(motif, side).len() < self.count() * motif.len()
    }
}

/// Sliding-window matcher for one motif
#[derive(Clone, Copy, Debug)]
pub struct MotifScanner<'a> {
    motif: &'a Motif,
}

impl<'a> MotifScanner<'a> {
    /// Create a scanner for a motif
    pub const fn new(motif: &'a Motif) -> Self {
        Self { motif }
    }

    /// Top-left positions where the motif matches the image viewed under `transform`
    pub fn occurrences(&self, image: &Bitmap, transform: Transform) -> Vec<(usize, usize)> {
        let side = image.side();
        if self.motif.is_empty() || self.motif.height() > side || self.motif.width() > side {
            return Vec::new();
        }
        let mut found = Vec::new();
        for row in 0..=side - self.motif.height() {
            for col in 0..=side - self.motif.width() {
                let matches = self
                    .motif
                    .offsets()
                    .iter()
                    .all(|&(dr, dc)| image.get_transformed(transform, row + dr, col + dc));
                if matches {
                    found.push((row, col));
                }
            }
        }
        found
    }

    /// Occurrence count for every orientation, indexed like `Transform::ALL`
    pub fn counts_per_orientation(&self, image: &Bitmap) -> [usize; 8] {
        Transform::ALL.map(|transform| self.occurrences(image, transform).len())
    }

    /// Occurrences in the first orientation that has any
    pub fn scan(&self, image: &Bitmap) -> Option<ScanResult> {
        Transform::ALL.into_iter().find_map(|transform| {
            let occurrences = self.occurrences(image, transform);
            (!occurrences.is_empty()).then_some(ScanResult {
                transform,
                occurrences,
            })
        })
    }
}

/// On pixels not attributed to a motif occurrence
///
/// Occurrences are assumed not to overlap; when they do, the shared pixels
/// are subtracted once per occurrence and a warning is logged.
///
/// # Errors
///
/// Returns an error if the occurrences account for more pixels than are on
pub fn roughness(image: &Bitmap, motif: &Motif, scan: Option<&ScanResult>) -> Result<usize> {
    let total = image.count_ones();
    let Some(scan) = scan else {
        return Ok(total);
    };
    if scan.has_overlap(motif, image.side()) {
        tracing::warn!(
            occurrences = scan.count(),
            "motif occurrences overlap, roughness underestimates the true value"
        );
    }
    let covered = scan.count() * motif.len();
    total.checked_sub(covered).ok_or_else(|| {
        computation_error(
            "roughness",
            &format!("{covered} motif pixels exceed {total} on pixels"),
        )
    })
}
