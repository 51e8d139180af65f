//! # Renderer
//!
//! Composes the final card: style the background, lay out the text against
//! the canvas width, then draw every line onto a copy of the styled
//! background.
//!
//! ## Pipeline
//!
//! ```text
//! Canvas ──► Style::apply ──► filtered background ─┐
//!                                                  ├─► draw_layout ─► Composition
//! TextSpec ──► FontResolver ──► layout::compose ───┘                 (image + bbox)
//! ```
//!
//! Each pass starts again from the unfiltered canvas; nothing is cached
//! between passes.
//!
//! ## Example
//!
//! ```
//! use image::Rgb;
//! use quotecard::{Canvas, TextSpec, bounds::Point, font::BuiltinFontResolver};
//! use quotecard::render::{RenderMode, recompute};
//!
//! let canvas = Canvas::blank(1200, 800, Rgb([40, 40, 40]));
//! let spec = TextSpec {
//!     quote: "Hello world".into(),
//!     anchor: Point::new(60, 60),
//!     ..TextSpec::default()
//! };
//! let card = recompute(&spec, &canvas, &BuiltinFontResolver, RenderMode::Final)?;
//! assert_eq!(card.bbox.map(|b| (b.x0, b.y0)), Some((60, 60)));
//! # Ok::<(), quotecard::QuotecardError>(())
//! ```

use image::{Rgb, RgbImage};

use crate::bounds::{BoundingBox, Point};
use crate::canvas::Canvas;
use crate::error::Result;
use crate::font::{FontFace, FontResolver};
use crate::layout::{self, LayoutResult};
use crate::text::TextSpec;

/// Offsets of the four shadow copies drawn under each line.
pub const SHADOW_OFFSETS: [(i32, i32); 4] = [(-2, 2), (2, 2), (2, -2), (-2, -2)];

/// Shadow fill.
pub const SHADOW_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

/// Which kind of pass is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Live preview: styles that want a drop shadow get one
    Preview,
    /// Exported output: never shadowed
    Final,
}

impl RenderMode {
    /// Whether this pass draws the shadow for `spec`'s style.
    pub fn shadow_for(self, spec: &TextSpec) -> bool {
        self == RenderMode::Preview && spec.style.wants_preview_shadow()
    }
}

/// Result of one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    /// Styled background with the text drawn on it
    pub image: RgbImage,
    /// Box around the text block; `None` when there is no text
    pub bbox: Option<BoundingBox>,
    /// Layout the image was drawn from
    pub layout: LayoutResult,
}

/// Lay out `spec`'s text for `canvas` with a freshly resolved font.
pub fn layout_for(spec: &TextSpec, canvas: &Canvas, fonts: &dyn FontResolver) -> Result<LayoutResult> {
    spec.validate()?;
    let font = fonts.resolve(spec.style.font_families(), spec.font_size);
    Ok(layout_with(spec, canvas.width(), font.as_ref()))
}

fn layout_with(spec: &TextSpec, canvas_width: u32, font: &dyn FontFace) -> LayoutResult {
    layout::compose(
        &spec.quote,
        &spec.author,
        font,
        spec.font_size,
        layout::max_text_width(canvas_width),
    )
}

/// Bounding box the text would occupy at the spec's anchor.
pub fn text_bbox(
    spec: &TextSpec,
    canvas: &Canvas,
    fonts: &dyn FontResolver,
) -> Result<Option<BoundingBox>> {
    let layout = layout_for(spec, canvas, fonts)?;
    Ok(BoundingBox::for_layout(spec.anchor, &layout))
}

/// Run one full pass: filter, lay out, draw.
pub fn recompute(
    spec: &TextSpec,
    canvas: &Canvas,
    fonts: &dyn FontResolver,
    mode: RenderMode,
) -> Result<Composition> {
    spec.validate()?;

    let background = spec.style.apply(canvas.base());
    let font = fonts.resolve(spec.style.font_families(), spec.font_size);
    let layout = layout_with(spec, background.width(), font.as_ref());

    tracing::debug!(
        style = %spec.style,
        font = font.name(),
        lines = layout.quote_lines.len() + layout.author_lines.len(),
        width = layout.total_size.0,
        height = layout.total_size.1,
        "recompute"
    );

    Ok(draw_layout(
        &background,
        layout,
        font.as_ref(),
        spec.anchor,
        spec.rgb(),
        mode.shadow_for(spec),
    ))
}

/// Draw a laid-out block onto a copy of `background` with its top-left at `anchor`.
///
/// Lines are drawn top to bottom with each line's measured box starting at the
/// cursor. A text line advances the cursor by its height plus the line
/// spacing, and a spacer line advances it by the spacer height without drawing.
pub fn draw_layout(
    background: &RgbImage,
    layout: LayoutResult,
    font: &dyn FontFace,
    anchor: Point,
    color: Rgb<u8>,
    shadow: bool,
) -> Composition {
    let mut image = background.clone();
    let mut y = anchor.y;

    for line in layout.lines() {
        if line.is_empty() {
            y = y.saturating_add(layout.spacer_height as i32);
            continue;
        }
        let bounds = font.text_bounds(line);
        let origin = Point::new(
            anchor.x.saturating_sub(bounds.left),
            y.saturating_sub(bounds.top),
        );
        if shadow {
            for (dx, dy) in SHADOW_OFFSETS {
                let at = origin.offset(dx, dy);
                font.draw_text(&mut image, at.x, at.y, line, SHADOW_COLOR);
            }
        }
        font.draw_text(&mut image, origin.x, origin.y, line, color);
        y = y.saturating_add((bounds.height() + layout.line_spacing) as i32);
    }

    Composition {
        image,
        bbox: BoundingBox::for_layout(anchor, &layout),
        layout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{BitmapFace, BuiltinFontResolver, TEST_FONT, TextBounds, TtfFace};
    use crate::style::Style;
    use std::cell::RefCell;

    /// Fixed-width test face that fills each glyph cell solid and records draws.
    struct BlockFace {
        advance: u32,
        height: u32,
        draws: RefCell<Vec<(i32, i32, String, Rgb<u8>)>>,
    }

    impl BlockFace {
        fn new(advance: u32, height: u32) -> Self {
            Self {
                advance,
                height,
                draws: RefCell::new(Vec::new()),
            }
        }
    }

    impl FontFace for BlockFace {
        fn name(&self) -> &str {
            "block"
        }

        fn text_bounds(&self, text: &str) -> TextBounds {
            let n = text.chars().count() as i32;
            if n == 0 {
                return TextBounds::default();
            }
            TextBounds {
                left: 0,
                top: 0,
                right: n * self.advance as i32,
                bottom: self.height as i32,
            }
        }

        fn draw_text(&self, target: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>) {
            self.draws
                .borrow_mut()
                .push((x, y, text.to_string(), color));
            let b = self.text_bounds(text);
            for py in y..y.saturating_add(b.height() as i32) {
                for px in x..x.saturating_add(b.width() as i32) {
                    crate::font::plot(target, px, py, color, 1.0);
                }
            }
        }
    }

    fn spec(quote: &str, author: &str) -> TextSpec {
        TextSpec {
            quote: quote.to_string(),
            author: author.to_string(),
            font_size: 20,
            color: [255, 0, 0],
            style: Style::None,
            anchor: Point::new(10, 10),
        }
    }

    #[test]
    fn test_line_origins_follow_layout() {
        let font = BlockFace::new(10, 20);
        let layout = layout::compose("aaa bbb", "Zed", &font, 20, 35);
        assert_eq!(layout.quote_lines, vec!["aaa", "bbb"]);

        let bg = RgbImage::new(100, 200);
        let card = draw_layout(&bg, layout, &font, Point::new(5, 7), Rgb([255, 0, 0]), false);

        let origins: Vec<(i32, i32, String)> = font
            .draws
            .borrow()
            .iter()
            .map(|(x, y, t, _)| (*x, *y, t.clone()))
            .collect();
        // spacing 6, spacer round(20 * 0.6) = 12
        assert_eq!(
            origins,
            vec![
                (5, 7, "aaa".to_string()),
                (5, 33, "bbb".to_string()),
                (5, 71, "\u{2013} Zed".to_string()),
            ]
        );
        assert_eq!(
            card.bbox,
            Some(BoundingBox {
                x0: 5,
                y0: 7,
                x1: 55,
                y1: 7 + 20 + 6 + 20 + 12 + 20,
            })
        );
    }

    #[test]
    fn test_shadow_draws_four_black_copies_first() {
        let font = BlockFace::new(10, 20);
        let layout = layout::compose("hi", "", &font, 20, 500);
        let bg = RgbImage::new(100, 100);
        draw_layout(&bg, layout, &font, Point::new(20, 20), Rgb([0, 255, 0]), true);

        let draws = font.draws.borrow();
        assert_eq!(draws.len(), 5);
        let shadow_origins: Vec<(i32, i32)> = draws[..4].iter().map(|d| (d.0, d.1)).collect();
        assert_eq!(shadow_origins, vec![(18, 22), (22, 22), (22, 18), (18, 18)]);
        assert!(draws[..4].iter().all(|d| d.3 == SHADOW_COLOR));
        assert_eq!((draws[4].0, draws[4].1, draws[4].3), (20, 20, Rgb([0, 255, 0])));
    }

    #[test]
    fn test_empty_text_leaves_background() {
        let canvas = Canvas::blank(64, 32, Rgb([9, 9, 9]));
        let card = recompute(&spec("", ""), &canvas, &BuiltinFontResolver, RenderMode::Preview)
            .unwrap();
        assert_eq!(card.bbox, None);
        assert_eq!(&card.image, canvas.base());
    }

    #[test]
    fn test_recompute_rejects_bad_font_size() {
        let canvas = Canvas::blank(64, 32, Rgb([0, 0, 0]));
        let mut bad = spec("x", "");
        bad.font_size = 4;
        assert!(recompute(&bad, &canvas, &BuiltinFontResolver, RenderMode::Final).is_err());
    }

    #[test]
    fn test_shadow_only_in_preview_for_epic_and_noir() {
        let mut s = spec("x", "");
        assert!(!RenderMode::Preview.shadow_for(&s));
        s.style = Style::Noir;
        assert!(RenderMode::Preview.shadow_for(&s));
        assert!(!RenderMode::Final.shadow_for(&s));
        s.style = Style::Epic;
        assert!(RenderMode::Preview.shadow_for(&s));
    }

    #[test]
    fn test_preview_shadow_changes_pixels_outside_glyphs() {
        let canvas = Canvas::blank(200, 80, Rgb([128, 128, 128]));
        let mut s = spec("H", "");
        s.style = Style::Noir;
        s.font_size = 24;

        let preview = recompute(&s, &canvas, &BuiltinFontResolver, RenderMode::Preview).unwrap();
        let final_card = recompute(&s, &canvas, &BuiltinFontResolver, RenderMode::Final).unwrap();
        assert_ne!(preview.image, final_card.image);
        assert_eq!(preview.bbox, final_card.bbox);
        assert!(preview.image.pixels().any(|p| *p == SHADOW_COLOR));
    }

    #[test]
    fn test_text_bbox_matches_render() {
        let canvas = Canvas::blank(400, 300, Rgb([0, 0, 0]));
        let s = spec("some words here", "Someone");
        let bbox = text_bbox(&s, &canvas, &BuiltinFontResolver).unwrap();
        let card = recompute(&s, &canvas, &BuiltinFontResolver, RenderMode::Final).unwrap();
        assert_eq!(bbox, card.bbox);
    }

    #[test]
    fn test_bitmap_render_stays_in_box() {
        let font = BitmapFace::new(32);
        let layout = layout::compose("Quote me", "", &font, 32, 400);
        let bg = RgbImage::new(400, 120);
        let card = draw_layout(&bg, layout, &font, Point::new(30, 40), Rgb([255, 255, 255]), false);
        let b = card.bbox.unwrap();
        for (x, y, p) in card.image.enumerate_pixels() {
            if p.0 != [0, 0, 0] {
                assert!(b.contains(Point::new(x as i32, y as i32)));
            }
        }
    }

    #[test]
    fn test_outline_render_stays_in_box() {
        let font = TtfFace::from_vec(TEST_FONT.to_vec(), 0, 48, "Tuffy").unwrap();
        let layout = layout::compose("jumpy Quiz glyphs", "", &font, 48, 300);
        assert!(layout.quote_lines.len() > 1);

        let bg = RgbImage::new(400, 300);
        let card = draw_layout(&bg, layout, &font, Point::new(30, 40), Rgb([255, 255, 255]), false);
        let b = card.bbox.unwrap();

        let mut lowest = i32::MIN;
        for (x, y, p) in card.image.enumerate_pixels() {
            if p.0 != [0, 0, 0] {
                let point = Point::new(x as i32, y as i32);
                assert!(b.contains(point), "ink at {:?} outside {:?}", point, b);
                lowest = lowest.max(point.y);
            }
        }
        // last line's descenders reach into the bottom of the box
        assert!(lowest > b.y1 - 48 / 3);
    }

    #[test]
    fn test_huge_anchor_does_not_overflow() {
        let font = BlockFace::new(10, 20);
        let layout = layout::compose("a b", "c", &font, 20, 15);
        let bg = RgbImage::new(10, 10);
        let far = Point::new(i32::MAX - 5, i32::MAX - 5);
        let card = draw_layout(&bg, layout, &font, far, Rgb([1, 1, 1]), true);
        assert_eq!(card.image, bg);
    }
}
