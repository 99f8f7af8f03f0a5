//! Tests for PNG rendering and export

#[cfg(test)]
mod tests {
    use image::Rgba;
    use mosaic::MosaicError;
    use mosaic::io::configuration::{MOTIF_COLOR, PIXEL_OFF_COLOR, PIXEL_ON_COLOR};
    use mosaic::io::image::{export_mosaic_png, render_mosaic};
    use mosaic::spatial::bitmap::Bitmap;
    use std::collections::HashSet;
    use tempfile::TempDir;

    fn sample() -> (Bitmap, HashSet<(usize, usize)>) {
        let mut bitmap = Bitmap::new(4);
        bitmap.set(0, 1, true);
        bitmap.set(2, 3, true);
        let motif_pixels = HashSet::from([(2, 3)]);
        (bitmap, motif_pixels)
    }

    // Tests palette selection per pixel
    // Verified by swapping x and y when sampling the bitmap
    #[test]
    fn test_render_colors() {
        let (bitmap, motif_pixels) = sample();
        let rendered = render_mosaic(&bitmap, &motif_pixels);

        assert_eq!(rendered.dimensions(), (4, 4));
        assert_eq!(*rendered.get_pixel(1, 0), Rgba(PIXEL_ON_COLOR));
        assert_eq!(*rendered.get_pixel(0, 1), Rgba(PIXEL_OFF_COLOR));
        assert_eq!(*rendered.get_pixel(3, 2), Rgba(MOTIF_COLOR));
    }

    // Tests export into a directory that does not exist yet
    // Verified by skipping parent directory creation
    #[test]
    fn test_export_creates_parent() {
        let (bitmap, motif_pixels) = sample();
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("nested").join("out.png");

        export_mosaic_png(&bitmap, &motif_pixels, &output).unwrap();

        let reloaded = image::open(&output).unwrap().to_rgba8();
        assert_eq!(reloaded.dimensions(), (4, 4));
        assert_eq!(*reloaded.get_pixel(3, 2), Rgba(MOTIF_COLOR));
    }

    // Tests that an empty image is refused
    // Verified by removing the size check
    #[test]
    fn test_export_empty_image() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("empty.png");
        let result = export_mosaic_png(&Bitmap::new(0), &HashSet::new(), &output);

        assert!(matches!(result, Err(MosaicError::InvalidParameter { .. })));
        assert!(!output.exists());
    }
}
