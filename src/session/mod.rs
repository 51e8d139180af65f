//! # Studio Session
//!
//! [`Studio`] holds the interactive state around the pure render core: the
//! canvas, the current [`TextSpec`], the last good composition and any drag
//! in progress. Setters only change state; the caller decides when to
//! [`Studio::recompute`].
//!
//! A failed pass never replaces what is on screen. [`Studio::recompute`] logs
//! the error and keeps returning the previous composition.

mod drag;

pub use drag::DragState;

use std::path::{Path, PathBuf};

use image::Rgb;

use crate::bounds::{self, BoundingBox, Point};
use crate::canvas::Canvas;
use crate::config::StudioConfig;
use crate::error::Result;
use crate::export;
use crate::font::FontResolver;
use crate::render::{self, Composition, RenderMode};
use crate::style::Style;
use crate::text::{self, TextSpec};

/// Anchor step for a plain arrow-key nudge.
pub const NUDGE_STEP: i32 = 1;

/// Anchor step for a coarse (shift) nudge.
pub const COARSE_NUDGE_STEP: i32 = 10;

/// Interactive quote card session.
pub struct Studio<R: FontResolver> {
    config: StudioConfig,
    canvas: Canvas,
    spec: TextSpec,
    fonts: R,
    current: Option<Composition>,
    drag: Option<DragState>,
}

impl<R: FontResolver> Studio<R> {
    /// Session on the configured blank canvas, with the default anchor.
    pub fn new(config: StudioConfig, fonts: R) -> Self {
        let canvas = config.blank_canvas.to_canvas();
        let mut studio = Self::with_canvas(config, canvas, fonts);
        studio.spec.anchor = TextSpec::default().anchor;
        studio
    }

    /// Session on an existing canvas, with the anchor at the initial margin.
    pub fn with_canvas(config: StudioConfig, canvas: Canvas, fonts: R) -> Self {
        let spec = TextSpec {
            font_size: text::clamp_font_size(config.default_font_size),
            color: config.default_color,
            anchor: canvas.initial_anchor(),
            ..TextSpec::default()
        };
        Self {
            config,
            canvas,
            spec,
            fonts,
            current: None,
            drag: None,
        }
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn spec(&self) -> &TextSpec {
        &self.spec
    }

    pub fn anchor(&self) -> Point {
        self.spec.anchor
    }

    /// Last successfully rendered preview.
    pub fn composition(&self) -> Option<&Composition> {
        self.current.as_ref()
    }

    /// Box of the last successful preview, used for overlays and hit-testing.
    pub fn bbox(&self) -> Option<BoundingBox> {
        self.current.as_ref().and_then(|c| c.bbox)
    }

    pub fn set_spec(&mut self, spec: TextSpec) {
        self.spec = spec;
    }

    pub fn set_quote(&mut self, quote: impl Into<String>) {
        self.spec.quote = quote.into();
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.spec.author = author.into();
    }

    /// Out-of-range sizes are clamped to the accepted range.
    pub fn set_font_size(&mut self, size: u32) {
        self.spec.font_size = text::clamp_font_size(size);
    }

    pub fn set_color(&mut self, color: Rgb<u8>) {
        self.spec.color = color.0;
    }

    pub fn set_style(&mut self, style: Style) {
        self.spec.style = style;
    }

    pub fn set_anchor(&mut self, anchor: Point) {
        self.spec.anchor = anchor;
    }

    /// Replace the canvas and move the anchor back to the initial margin.
    ///
    /// On failure the canvas and anchor are left as they were.
    pub fn load_image(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let canvas = Canvas::open(path)?;
        self.spec.anchor = canvas.initial_anchor();
        self.canvas = canvas;
        self.drag = None;
        Ok(())
    }

    /// Render the current state without touching the session.
    pub fn render(&self, mode: RenderMode) -> Result<Composition> {
        render::recompute(&self.spec, &self.canvas, &self.fonts, mode)
    }

    /// Re-render the preview and return what should be on screen.
    pub fn recompute(&mut self) -> Option<&Composition> {
        match self.render(RenderMode::Preview) {
            Ok(card) => self.current = Some(card),
            Err(err) => tracing::error!(%err, "recompute failed; keeping last frame"),
        }
        self.current.as_ref()
    }

    /// Move the anchor so the text box is pulled back inside the canvas.
    pub fn clamp_anchor(&mut self) -> Result<Point> {
        if let Some(bbox) = render::text_bbox(&self.spec, &self.canvas, &self.fonts)? {
            self.spec.anchor = bounds::clamp(self.spec.anchor, &bbox, self.canvas.size());
        }
        Ok(self.spec.anchor)
    }

    /// Keyboard move by whole steps, then clamp.
    pub fn nudge(&mut self, dx: i32, dy: i32, coarse: bool) -> Result<Point> {
        let step = if coarse { COARSE_NUDGE_STEP } else { NUDGE_STEP };
        self.spec.anchor = self
            .spec
            .anchor
            .offset(dx.saturating_mul(step), dy.saturating_mul(step));
        self.clamp_anchor()
    }

    /// Start a drag if `point` is on the current text box.
    pub fn begin_drag(&mut self, point: Point) -> bool {
        if !bounds::hit_test(point, self.bbox().as_ref()) {
            return false;
        }
        self.drag = Some(DragState::grab(point, self.spec.anchor));
        true
    }

    /// Follow the pointer during a drag. Without a drag this is a no-op.
    pub fn drag_to(&mut self, point: Point) -> Result<Point> {
        let Some(drag) = self.drag else {
            return Ok(self.spec.anchor);
        };
        self.spec.anchor = drag.anchor_for(point);
        self.clamp_anchor()
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Render the final card (no preview shadow) and save it.
    pub fn export(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let card = self.render(RenderMode::Final)?;
        export::save(&card.image, path, self.config.jpeg_quality)
    }
}
