//! Pointer drag bookkeeping.

use crate::bounds::Point;

/// An active drag: the grab point's offset from the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    offset: (i32, i32),
}

impl DragState {
    /// Start a drag at `point` while the block sits at `anchor`.
    pub fn grab(point: Point, anchor: Point) -> Self {
        Self {
            offset: (
                point.x.saturating_sub(anchor.x),
                point.y.saturating_sub(anchor.y),
            ),
        }
    }

    /// Anchor that keeps the grab offset under `point`.
    pub fn anchor_for(&self, point: Point) -> Point {
        point.offset(self.offset.0.saturating_neg(), self.offset.1.saturating_neg())
    }

    pub fn offset(&self) -> (i32, i32) {
        self.offset
    }
}
