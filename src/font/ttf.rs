//! Outline font rendering with ab_glyph.
//!
//! Glyphs are placed with the font's own advances and kerning on a baseline
//! one ascent below the line origin. A line is as tall as the font's ascent
//! minus its descent, widened only where ink pokes outside that band.
//! Coverage is anti-aliased and blended into the target image.

use ab_glyph::{Font, FontArc, Glyph, GlyphId, PxScale, ScaleFont, point};
use image::{Rgb, RgbImage};

use super::{FontFace, TextBounds, plot};

/// An outline font at a fixed pixel size.
#[derive(Clone)]
pub struct TtfFace {
    font: FontArc,
    scale: PxScale,
    name: String,
}

impl std::fmt::Debug for TtfFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtfFace")
            .field("name", &self.name)
            .field("scale", &self.scale)
            .finish()
    }
}

impl TtfFace {
    /// Bind `font` to a pixel height.
    pub fn new(font: FontArc, pixel_size: u32, name: impl Into<String>) -> Self {
        Self {
            font,
            scale: PxScale::from(pixel_size.max(1) as f32),
            name: name.into(),
        }
    }

    /// Parse font bytes (TTF/OTF, face `index` for collections).
    pub fn from_vec(
        data: Vec<u8>,
        index: u32,
        pixel_size: u32,
        name: impl Into<String>,
    ) -> Option<Self> {
        let font = ab_glyph::FontVec::try_from_vec_and_index(data, index).ok()?;
        Some(Self::new(FontArc::new(font), pixel_size, name))
    }

    /// Lay out `text` on one line; returns positioned glyphs and the caret end.
    fn layout(&self, text: &str) -> (Vec<Glyph>, f32) {
        let scaled = self.font.as_scaled(self.scale);
        let baseline = scaled.ascent();

        let mut glyphs = Vec::with_capacity(text.len());
        let mut caret = 0.0f32;
        let mut previous: Option<GlyphId> = None;

        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev) = previous {
                caret += scaled.kern(prev, id);
            }
            glyphs.push(id.with_scale_and_position(self.scale, point(caret, baseline)));
            caret += scaled.h_advance(id);
            previous = Some(id);
        }

        (glyphs, caret)
    }

    /// Ascent minus descent, rounded to whole pixels.
    fn line_height(&self) -> f32 {
        let scaled = self.font.as_scaled(self.scale);
        (scaled.ascent() - scaled.descent()).round()
    }
}

impl FontFace for TtfFace {
    fn name(&self) -> &str {
        &self.name
    }

    fn text_bounds(&self, text: &str) -> TextBounds {
        if text.is_empty() {
            return TextBounds::default();
        }

        let (glyphs, caret) = self.layout(text);
        let (mut left, mut right) = (0.0f32, caret);
        let (mut top, mut bottom) = (0.0f32, self.line_height());

        for glyph in glyphs {
            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let b = outlined.px_bounds();
                left = left.min(b.min.x);
                right = right.max(b.max.x);
                top = top.min(b.min.y);
                bottom = bottom.max(b.max.y);
            }
        }

        TextBounds {
            left: left.floor() as i32,
            top: top.floor() as i32,
            right: right.ceil() as i32,
            bottom: bottom.ceil() as i32,
        }
    }

    fn draw_text(&self, target: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>) {
        let (glyphs, _) = self.layout(text);
        for glyph in glyphs {
            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                let gx = x.saturating_add(bounds.min.x as i32);
                let gy = y.saturating_add(bounds.min.y as i32);
                outlined.draw(|px, py, coverage| {
                    plot(
                        target,
                        gx.saturating_add(px as i32),
                        gy.saturating_add(py as i32),
                        color,
                        coverage,
                    );
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::TEST_FONT;

    fn tuffy(size: u32) -> TtfFace {
        TtfFace::from_vec(TEST_FONT.to_vec(), 0, size, "Tuffy").unwrap()
    }

    fn inked(img: &RgbImage) -> Vec<(i32, i32)> {
        img.enumerate_pixels()
            .filter(|(_, _, p)| p.0 != [0, 0, 0])
            .map(|(x, y, _)| (x as i32, y as i32))
            .collect()
    }

    #[test]
    fn test_line_height_is_font_metric() {
        let face = tuffy(64);
        let caps = face.text_bounds("HELLO");
        let low = face.text_bounds("ace");
        let desc = face.text_bounds("gjpq");

        assert_eq!(caps.top, 0);
        assert_eq!(caps.height(), 64);
        assert_eq!(low.height(), caps.height());
        assert_eq!(desc.height(), caps.height());
    }

    #[test]
    fn test_width_grows_with_text() {
        let face = tuffy(32);
        let one = face.text_bounds("Hello");
        let two = face.text_bounds("Hello Hello");
        assert!(one.width() > 0);
        assert!(two.width() > one.width() * 2 - 4);
        assert_eq!(face.text_bounds(""), TextBounds::default());
    }

    #[test]
    fn test_draw_stays_inside_bounds() {
        let face = tuffy(48);
        for text in ["Hello", "gjpq", "Wavy AVA"] {
            let mut img = RgbImage::new(400, 120);
            face.draw_text(&mut img, 20, 30, text, Rgb([255, 255, 255]));
            let b = face.text_bounds(text);

            let ink = inked(&img);
            assert!(!ink.is_empty(), "{}", text);
            for (x, y) in ink {
                assert!(x >= 20 + b.left && x < 20 + b.right, "{} x={}", text, x);
                assert!(y >= 30 + b.top && y < 30 + b.bottom, "{} y={}", text, y);
            }
        }
    }

    #[test]
    fn test_descenders_reach_lower_than_caps() {
        let face = tuffy(48);
        let lowest = |text: &str| {
            let mut img = RgbImage::new(200, 80);
            face.draw_text(&mut img, 0, 0, text, Rgb([255, 255, 255]));
            inked(&img).into_iter().map(|(_, y)| y).max().unwrap()
        };
        assert!(lowest("gjpq") > lowest("HHHH"));
    }

    #[test]
    fn test_rejects_invalid_font_data() {
        assert!(TtfFace::from_vec(b"not a font".to_vec(), 0, 32, "junk").is_none());
        assert!(TtfFace::from_vec(Vec::new(), 0, 32, "empty").is_none());
    }
}
