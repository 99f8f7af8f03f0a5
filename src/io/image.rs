//! PNG export of reconstructed mosaics with motif highlighting

use crate::io::configuration::{MOTIF_COLOR, PIXEL_OFF_COLOR, PIXEL_ON_COLOR};
use crate::io::error::{MosaicError, Result};
use crate::spatial::bitmap::Bitmap;
use image::{ImageBuffer, Rgba};
use std::collections::HashSet;
use std::path::Path;

/// Render a composite image, painting motif pixels in their own colour
pub fn render_mosaic(
    composite: &Bitmap,
    motif_pixels: &HashSet<(usize, usize)>,
) -> ImageBuffer<Rgba<u8>, Vec<u8>> {
    let side = composite.side() as u32;
    ImageBuffer::from_fn(side, side, |x, y| {
        let (row, col) = (y as usize, x as usize);
        let color = if motif_pixels.contains(&(row, col)) {
            MOTIF_COLOR
        } else if composite.get(row, col) {
            PIXEL_ON_COLOR
        } else {
            PIXEL_OFF_COLOR
        };
        Rgba(color)
    })
}

/// Export a composite image as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - The composite image is empty
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_mosaic_png(
    composite: &Bitmap,
    motif_pixels: &HashSet<(usize, usize)>,
    output_path: &Path,
) -> Result<()> {
    if composite.side() == 0 {
        return Err(MosaicError::InvalidParameter {
            parameter: "composite",
            value: "0x0".to_string(),
            reason: "cannot export an empty image".to_string(),
        });
    }

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    render_mosaic(composite, motif_pixels)
        .save(output_path)
        .map_err(|e| MosaicError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    tracing::info!(path = %output_path.display(), "mosaic exported");
    Ok(())
}
