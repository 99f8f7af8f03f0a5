//! Synthetic puzzle generation
//!
//! Builds a lattice image whose tile seams carry distinct, non-palindromic
//! fingerprints, cuts it into overlapping tiles, and scrambles their order,
//! orientation and ids. The result satisfies every precondition of the
//! reconstruction pipeline, which makes it suitable for tests and benchmarks.

use crate::io::configuration::{
    GENERATED_ID_BASE, GENERATED_ID_RANGE, GENERATED_PIXEL_DENSITY, MAX_TILE_SIZE, MIN_TILE_SIZE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::bitmap::Bitmap;
use crate::spatial::tiles::{Fingerprint, Tile, TileId, TileSet};
use crate::spatial::transform::Transform;
use ndarray::{Array2, s};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::HashSet;

/// A generated puzzle together with its known solution
#[derive(Clone, Debug)]
pub struct GeneratedPuzzle {
    /// Scrambled tiles
    pub tiles: TileSet,
    /// Composite image of the unscrambled mosaic
    pub composite: Bitmap,
    /// Corner tile ids: top-left, top-right, bottom-left, bottom-right
    pub corners: [TileId; 4],
    /// Number of tiles along each side
    pub side: usize,
}

/// Number of seam fingerprints that are distinct up to reversal
///
/// Lattice corner pixels are always off, so a seam is fully described by its
/// `inner` middle bits. Palindromic patterns are excluded.
const fn seam_class_count(inner: u32) -> u64 {
    let total = 1_u64 << inner;
    let palindromes = 1_u64 << inner.div_ceil(2);
    (total - palindromes) / 2
}

fn draw_seams(rng: &mut StdRng, inner: u32, count: usize) -> Vec<Fingerprint> {
    let mut seen = HashSet::with_capacity(count);
    let mut seams = Vec::with_capacity(count);
    while seams.len() < count {
        let value = Fingerprint::new(rng.random_range(0..1_u32 << inner));
        let reversed = value.reversed(inner);
        if reversed != value && seen.insert(value.min(reversed)) {
            seams.push(value);
        }
    }
    seams
}

fn write_seam<F>(value: Fingerprint, tile_size: usize, mut put: F)
where
    F: FnMut(usize, bool),
{
    let inner = tile_size - 2;
    put(0, false);
    for bit in 0..inner {
        let shift = inner - 1 - bit;
        put(bit + 1, (value.value() >> shift) & 1 == 1);
    }
    put(tile_size - 1, false);
}

/// Generate a scrambled `side` x `side` puzzle of `tile_size` pixel tiles
///
/// # Errors
///
/// Returns an error if the tile size is unsupported, the side is zero, or the
/// tile size offers too few distinct seam fingerprints for the requested side
pub fn generate_puzzle(side: usize, tile_size: usize, seed: u64) -> Result<GeneratedPuzzle> {
    if !(MIN_TILE_SIZE..=MAX_TILE_SIZE).contains(&tile_size) {
        return Err(invalid_parameter(
            "tile_size",
            &tile_size,
            &format!("must lie within {MIN_TILE_SIZE}..={MAX_TILE_SIZE}"),
        ));
    }
    if side == 0 {
        return Err(invalid_parameter("side", &side, &"must be positive"));
    }
    let tile_count = side * side;
    if tile_count > GENERATED_ID_RANGE {
        return Err(invalid_parameter(
            "side",
            &side,
            &format!("at most {GENERATED_ID_RANGE} tiles can be given distinct ids"),
        ));
    }

    // Every tile row and column contributes side + 1 seam lines of side segments
    let seam_count = 2 * side * (side + 1);
    let inner = (tile_size - 2) as u32;
    let available = seam_class_count(inner);
    if available < seam_count as u64 {
        return Err(invalid_parameter(
            "side",
            &side,
            &format!(
                "{seam_count} seams needed but tile size {tile_size} only offers {available} distinct fingerprints"
            ),
        ));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut seams = draw_seams(&mut rng, inner, seam_count).into_iter();

    let step = tile_size - 1;
    let lattice_side = side * step + 1;
    let mut lattice = Array2::from_shape_simple_fn((lattice_side, lattice_side), || {
        rng.random_bool(GENERATED_PIXEL_DENSITY)
    });

    for line in 0..=side {
        for segment in 0..side {
            if let Some(value) = seams.next() {
                write_seam(value, tile_size, |offset, on| {
                    if let Some(cell) = lattice.get_mut((line * step, segment * step + offset)) {
                        *cell = on;
                    }
                });
            }
            if let Some(value) = seams.next() {
                write_seam(value, tile_size, |offset, on| {
                    if let Some(cell) = lattice.get_mut((segment * step + offset, line * step)) {
                        *cell = on;
                    }
                });
            }
        }
    }

    let interior = tile_size - 2;
    let mut composite = Bitmap::new(side * interior);
    for row in 0..side * interior {
        for col in 0..side * interior {
            let lattice_row = (row / interior) * step + row % interior + 1;
            let lattice_col = (col / interior) * step + col % interior + 1;
            let on = lattice
                .get((lattice_row, lattice_col))
                .copied()
                .unwrap_or(false);
            composite.set(row, col, on);
        }
    }

    let ids: Vec<TileId> = rand::seq::index::sample(&mut rng, GENERATED_ID_RANGE, tile_count)
        .into_iter()
        .map(|offset| TileId(GENERATED_ID_BASE + offset as u32))
        .collect();

    let mut tiles = Vec::with_capacity(tile_count);
    for (position, &id) in ids.iter().enumerate() {
        let (row, col) = (position / side, position % side);
        let window = lattice
            .slice(s![
                row * step..row * step + tile_size,
                col * step..col * step + tile_size
            ])
            .to_owned();
        let transform = Transform::ALL
            .get(rng.random_range(0..Transform::ALL.len()))
            .copied()
            .unwrap_or_default();
        tiles.push(Tile::new(id, transform.apply_grid(&window))?);
    }

    let last = tile_count - 1;
    let corner = |position: usize| ids.get(position).copied().unwrap_or(TileId(0));
    let corners = [
        corner(0),
        corner(side - 1),
        corner(last + 1 - side),
        corner(last),
    ];

    tiles.shuffle(&mut rng);

    Ok(GeneratedPuzzle {
        tiles: TileSet::new(tiles)?,
        composite,
        corners,
        side,
    })
}
