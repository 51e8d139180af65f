//! # Bounding Box, Clamping and Hit-Testing
//!
//! The text block's bounding box is derived from the anchor (its top-left
//! corner) and the layout's total size. It is what the caller draws as a
//! selection overlay and what decides whether a press starts a drag.
//!
//! ## Clamping
//!
//! [`clamp`] translates the anchor by the smallest correction that pulls an
//! overflowing edge back inside the canvas. When a block is wider (or taller)
//! than the canvas both edges overflow; the right (bottom) correction wins, so
//! the block ends up flush with the far edge and still overflows the near one.

use serde::{Deserialize, Serialize};

use crate::layout::LayoutResult;

/// A pixel position on the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This point moved by (`dx`, `dy`), saturating at the `i32` range.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Axis-aligned box in canvas pixels, `x0 <= x1` and `y0 <= y1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl BoundingBox {
    /// Box with its top-left at `anchor` and the given size.
    ///
    /// The far edges saturate at `i32::MAX`.
    pub fn from_anchor(anchor: Point, size: (u32, u32)) -> Self {
        let extent = |len: u32| i32::try_from(len).unwrap_or(i32::MAX);
        Self {
            x0: anchor.x,
            y0: anchor.y,
            x1: anchor.x.saturating_add(extent(size.0)),
            y1: anchor.y.saturating_add(extent(size.1)),
        }
    }

    /// Box around a laid-out block, or `None` if the block is empty.
    pub fn for_layout(anchor: Point, layout: &LayoutResult) -> Option<Self> {
        if layout.is_empty() {
            None
        } else {
            Some(Self::from_anchor(anchor, layout.total_size))
        }
    }

    pub fn width(&self) -> u32 {
        self.x1.abs_diff(self.x0)
    }

    pub fn height(&self) -> u32 {
        self.y1.abs_diff(self.y0)
    }

    /// Inclusive containment test on all four edges.
    pub fn contains(&self, point: Point) -> bool {
        (self.x0..=self.x1).contains(&point.x) && (self.y0..=self.y1).contains(&point.y)
    }
}

/// Whether `point` falls inside the current box. No box means no hit.
pub fn hit_test(point: Point, bbox: Option<&BoundingBox>) -> bool {
    bbox.is_some_and(|b| b.contains(point))
}

/// Anchor translated so that `bbox` is pulled back inside a canvas of `canvas_size`.
///
/// A box already inside the canvas leaves the anchor unchanged. Font size and
/// layout are never touched.
pub fn clamp(anchor: Point, bbox: &BoundingBox, canvas_size: (u32, u32)) -> Point {
    let (dx, dy) = clamp_offset(bbox, canvas_size);
    anchor.offset(dx, dy)
}

/// Translation needed to pull `bbox` inside the canvas.
pub fn clamp_offset(bbox: &BoundingBox, canvas_size: (u32, u32)) -> (i32, i32) {
    let (width, height) = (canvas_size.0 as i32, canvas_size.1 as i32);
    (
        axis_correction(bbox.x0, bbox.x1, width),
        axis_correction(bbox.y0, bbox.y1, height),
    )
}

fn axis_correction(start: i32, end: i32, limit: i32) -> i32 {
    let mut delta = 0;
    if start < 0 {
        delta = start.saturating_neg();
    }
    if end > limit {
        delta = delta.min(limit.saturating_sub(end));
    }
    delta
}
