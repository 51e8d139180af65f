//! # Text Layout
//!
//! Turns a quote and an optional author line into stacked, wrapped lines and
//! the total size of the block they occupy.
//!
//! ## Block structure
//!
//! ```text
//! ┌──────────────────────────┐  anchor
//! │ quote line 1             │
//! │   line_spacing           │
//! │ quote line 2             │
//! │   spacer_height          │  ("" entry in author_lines)
//! │ – Author Name            │
//! └──────────────────────────┘
//! ```
//!
//! The spacer is always the first author entry when an author is present,
//! even if the quote is empty.

mod measure;
mod wrap;

pub use measure::{BlockMetrics, measure_multiline};
pub use wrap::wrap_text;

use crate::font::FontFace;

/// Fraction of the canvas kept free on each side of the text.
pub const MARGIN_RATIO: f64 = 0.05;

/// Prefix placed before the author name.
pub const AUTHOR_MARKER: &str = "\u{2013}";

/// Minimum gap between consecutive lines.
const MIN_LINE_SPACING: u32 = 6;

/// Wrapped and measured text block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutResult {
    /// Wrapped quote lines
    pub quote_lines: Vec<String>,
    /// Author block; empty strings are spacer lines
    pub author_lines: Vec<String>,
    /// Width and height of the whole block
    pub total_size: (u32, u32),
    /// Gap between consecutive text lines
    pub line_spacing: u32,
    /// Height of a spacer line
    pub spacer_height: u32,
}

impl LayoutResult {
    /// A block with zero width or height has nothing to draw or hit.
    pub fn is_empty(&self) -> bool {
        self.total_size.0 == 0 || self.total_size.1 == 0
    }

    /// Whether an author block (spacer included) follows the quote.
    pub fn has_author_block(&self) -> bool {
        !self.author_lines.is_empty()
    }

    /// Quote lines followed by author lines, in draw order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.quote_lines
            .iter()
            .chain(&self.author_lines)
            .map(String::as_str)
    }
}

/// Gap between lines for a font size: a quarter of the size, at least 6px.
pub fn line_spacing(font_size: u32) -> u32 {
    MIN_LINE_SPACING.max((font_size as f64 * 0.25).round() as u32)
}

/// Widest allowed line for a canvas width, leaving the margin on both sides.
pub fn max_text_width(canvas_width: u32) -> u32 {
    (canvas_width as f64 * (1.0 - 2.0 * MARGIN_RATIO)) as u32
}

/// Lay out `quote` and `author` with `font` inside `max_width` pixels.
///
/// `font_size` drives the line spacing and the spacer fallback used when
/// there is no quote line to derive the spacer from.
pub fn compose(
    quote: &str,
    author: &str,
    font: &dyn FontFace,
    font_size: u32,
    max_width: u32,
) -> LayoutResult {
    let line_spacing = line_spacing(font_size);

    let quote_lines = wrap_text(quote, font, max_width);
    let quote_block = measure_multiline(&quote_lines, font, line_spacing);

    let author = author.trim();
    let mut author_lines = Vec::new();
    if !author.is_empty() {
        let attribution = format!("{} {}", AUTHOR_MARKER, author);
        author_lines.push(String::new());
        author_lines.extend(wrap_text(&attribution, font, max_width));
    }

    let text_lines: Vec<&String> = author_lines.iter().filter(|l| !l.is_empty()).collect();
    let author_block = measure_multiline(&text_lines, font, line_spacing);

    let spacer_height = if author_lines.is_empty() {
        0
    } else {
        match quote_block.line_heights.last() {
            Some(&last) => (last as f64 * 0.6).round() as u32,
            None => (font_size as f64 * 0.6).round() as u32,
        }
    };

    let total_width = quote_block.width.max(author_block.width);
    let total_height = quote_block.height + spacer_height + author_block.height;

    LayoutResult {
        quote_lines,
        author_lines,
        total_size: (total_width, total_height),
        line_spacing,
        spacer_height,
    }
}
