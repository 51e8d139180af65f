//! # Fonts
//!
//! The layout engine only talks to fonts through the [`FontFace`] trait: it
//! needs the pixel box of a text run and a way to draw that run onto an RGB
//! image. Two faces are provided:
//!
//! - [`TtfFace`]: outline fonts rasterized with `ab_glyph`
//! - [`BitmapFace`]: the built-in Spleen bitmap font, always available
//!
//! Faces are obtained from a [`FontResolver`], which maps a family preference
//! list and a pixel size to a face and never fails.
//!
//! ## Coordinates
//!
//! All bounds are relative to the line origin, the top-left corner passed to
//! [`FontFace::draw_text`]. Some glyphs reach left of or above it, so `left`
//! and `top` can be negative.

mod bitmap;
mod resolve;
mod ttf;

pub use bitmap::BitmapFace;
pub use resolve::{BuiltinFontResolver, FontConfig, FontResolver, SystemFontResolver};
pub use ttf::TtfFace;

use image::{Rgb, RgbImage};

/// Tuffy Regular (public domain), used to exercise outline fonts in tests.
#[cfg(test)]
pub(crate) const TEST_FONT: &[u8] = include_bytes!("../../tests/fonts/Tuffy.ttf");

/// Pixel box of a text run relative to its line origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBounds {
    /// Horizontal extent in pixels.
    pub fn width(&self) -> u32 {
        (self.right - self.left).max(0) as u32
    }

    /// Vertical extent in pixels.
    pub fn height(&self) -> u32 {
        (self.bottom - self.top).max(0) as u32
    }
}

/// A font bound to a pixel size, able to measure and draw single lines.
pub trait FontFace {
    /// Human readable face name, for logs.
    fn name(&self) -> &str;

    /// Pixel box of `text` laid out on one line.
    fn text_bounds(&self, text: &str) -> TextBounds;

    /// Draw `text` with its line origin at (`x`, `y`), clipped to `target`.
    fn draw_text(&self, target: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>);
}

impl<F: FontFace + ?Sized> FontFace for Box<F> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn text_bounds(&self, text: &str) -> TextBounds {
        (**self).text_bounds(text)
    }

    fn draw_text(&self, target: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>) {
        (**self).draw_text(target, x, y, text, color)
    }
}

/// Write `color` into `target` at (`x`, `y`) with the given coverage.
///
/// Out-of-bounds coordinates are ignored.
pub(crate) fn plot(target: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, coverage: f32) {
    if x < 0 || y < 0 || x >= target.width() as i32 || y >= target.height() as i32 {
        return;
    }
    let px = target.get_pixel_mut(x as u32, y as u32);
    for (dst, src) in px.0.iter_mut().zip(color.0) {
        *dst = crate::shader::over(*dst, src, coverage);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_size() {
        let b = TextBounds {
            left: -2,
            top: 5,
            right: 30,
            bottom: 20,
        };
        assert_eq!(b.width(), 32);
        assert_eq!(b.height(), 15);
        assert_eq!(TextBounds::default().width(), 0);
    }

    #[test]
    fn test_plot_clips() {
        let mut img = RgbImage::new(2, 2);
        plot(&mut img, -1, 0, Rgb([255, 0, 0]), 1.0);
        plot(&mut img, 2, 0, Rgb([255, 0, 0]), 1.0);
        plot(&mut img, 1, 1, Rgb([255, 0, 0]), 1.0);
        assert_eq!(img.get_pixel(1, 1), &Rgb([255, 0, 0]));
        assert_eq!(img.pixels().filter(|p| p.0[0] != 0).count(), 1);
    }
}
