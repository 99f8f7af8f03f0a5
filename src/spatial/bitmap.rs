use crate::io::configuration::{GLYPH_OFF, GLYPH_ON};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::transform::Transform;
use bitvec::prelude::*;
use ndarray::Array2;
use std::fmt;

/// Square on/off bitmap holding the reconstructed mosaic
///
/// Reads outside the square return `false`; writes outside it are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    bits: BitVec,
    side: usize,
}

impl Bitmap {
    /// Create a bitmap with every pixel off
    pub fn new(side: usize) -> Self {
        Self {
            bits: bitvec![0; side * side],
            side,
        }
    }

    /// Copy a square boolean array into a bitmap
    ///
    /// # Errors
    ///
    /// Returns an error if the array is not square
    pub fn from_array(pixels: &Array2<bool>) -> Result<Self> {
        let (rows, cols) = pixels.dim();
        if rows != cols {
            return Err(invalid_parameter(
                "pixels",
                &format!("{rows}x{cols}"),
                &"bitmaps must be square",
            ));
        }
        let mut bitmap = Self::new(rows);
        for ((row, col), &on) in pixels.indexed_iter() {
            bitmap.set(row, col, on);
        }
        Ok(bitmap)
    }

    /// Side length in pixels
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Pixel value at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row >= self.side || col >= self.side {
            return false;
        }
        self.bits.get(row * self.side + col).as_deref() == Some(&true)
    }

    /// Set the pixel at `(row, col)`
    pub fn set(&mut self, row: usize, col: usize, on: bool) {
        if row < self.side && col < self.side {
            self.bits.set(row * self.side + col, on);
        }
    }

    /// Pixel value at `(row, col)` of the bitmap viewed under a transform
    pub fn get_transformed(&self, transform: Transform, row: usize, col: usize) -> bool {
        if row >= self.side || col >= self.side {
            return false;
        }
        let (source_row, source_col) = transform.source_coord(row, col, self.side);
        self.get(source_row, source_col)
    }

    /// Transformed copy of the whole bitmap
    #[must_use]
    pub fn transformed(&self, transform: Transform) -> Self {
        let mut result = Self::new(self.side);
        for row in 0..self.side {
            for col in 0..self.side {
                result.set(row, col, self.get_transformed(transform, row, col));
            }
        }
        result
    }

    /// Number of pixels that are on
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Copy into a boolean array
    pub fn to_array(&self) -> Array2<bool> {
        Array2::from_shape_fn((self.side, self.side), |(row, col)| self.get(row, col))
    }
}

impl fmt::Display for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.side {
            let line: String = (0..self.side)
                .map(|col| if self.get(row, col) { GLYPH_ON } else { GLYPH_OFF })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
