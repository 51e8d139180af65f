//! # Canvas
//!
//! The background raster. A canvas is created on load and replaced wholesale
//! on the next load; styles and text always work on copies.

use std::path::Path;

use image::{DynamicImage, ImageReader, Rgb, RgbImage};

use crate::bounds::Point;
use crate::error::{QuotecardError, Result};
use crate::layout::MARGIN_RATIO;

/// File extensions accepted by [`Canvas::open`].
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "webp"];

/// Immutable RGB background image.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    base: RgbImage,
}

impl Canvas {
    /// A solid-color canvas.
    pub fn blank(width: u32, height: u32, color: Rgb<u8>) -> Self {
        Self {
            base: RgbImage::from_pixel(width, height, color),
        }
    }

    /// Wrap an already decoded image, normalizing it to RGB.
    pub fn from_image(image: DynamicImage) -> Self {
        Self {
            base: image.into_rgb8(),
        }
    }

    /// Decode a PNG, JPEG, BMP or WEBP file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let load_err = |source| QuotecardError::Load {
            path: path.to_path_buf(),
            source,
        };

        let image = ImageReader::open(path)?
            .with_guessed_format()?
            .decode()
            .map_err(load_err)?;

        tracing::info!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "loaded background"
        );
        Ok(Self::from_image(image))
    }

    /// The unfiltered background.
    pub fn base(&self) -> &RgbImage {
        &self.base
    }

    pub fn width(&self) -> u32 {
        self.base.width()
    }

    pub fn height(&self) -> u32 {
        self.base.height()
    }

    pub fn size(&self) -> (u32, u32) {
        self.base.dimensions()
    }

    /// Where text starts on a freshly loaded canvas: one margin in from the top-left.
    pub fn initial_anchor(&self) -> Point {
        Point::new(
            (self.width() as f64 * MARGIN_RATIO) as i32,
            (self.height() as f64 * MARGIN_RATIO) as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_canvas() {
        let canvas = Canvas::blank(1200, 800, Rgb([40, 40, 40]));
        assert_eq!(canvas.size(), (1200, 800));
        assert!(canvas.base().pixels().all(|p| *p == Rgb([40, 40, 40])));
    }

    #[test]
    fn test_initial_anchor() {
        assert_eq!(
            Canvas::blank(1200, 800, Rgb([0, 0, 0])).initial_anchor(),
            Point::new(60, 40)
        );
        assert_eq!(
            Canvas::blank(333, 99, Rgb([0, 0, 0])).initial_anchor(),
            Point::new(16, 4)
        );
    }

    #[test]
    fn test_from_image_normalizes_to_rgb() {
        let rgba = image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 128]));
        let canvas = Canvas::from_image(DynamicImage::ImageRgba8(rgba));
        assert_eq!(canvas.size(), (3, 2));
        assert_eq!(canvas.base().get_pixel(0, 0), &Rgb([10, 20, 30]));
    }

    #[test]
    fn test_open_round_trips_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bg.png");
        RgbImage::from_pixel(8, 4, Rgb([1, 2, 3])).save(&path).unwrap();

        let canvas = Canvas::open(&path).unwrap();
        assert_eq!(canvas.size(), (8, 4));
        assert_eq!(canvas.base().get_pixel(7, 3), &Rgb([1, 2, 3]));
    }

    #[test]
    fn test_open_missing_file() {
        let err = Canvas::open("/no/such/background.png").unwrap_err();
        assert!(matches!(err, QuotecardError::Io(_)));
    }

    #[test]
    fn test_open_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"\x89PNG\r\n\x1a\nthis is not a png").unwrap();

        let err = Canvas::open(&path).unwrap_err();
        assert!(matches!(err, QuotecardError::Load { .. }));
    }
}
