//! # Quotecard - Quote Card Compositor
//!
//! Quotecard places a quote and its author on top of a background image. It
//! provides:
//!
//! - **Styles**: deterministic filter pipelines applied to the background
//! - **Layout**: greedy word wrap, block measurement and author attribution
//! - **Rendering**: text compositing with an optional preview drop shadow
//! - **Interaction**: bounding-box clamping, hit-testing and drag state
//!
//! ## Quick Start
//!
//! ```no_run
//! use quotecard::{Studio, config::StudioConfig, font::SystemFontResolver, style::Style};
//!
//! let config = StudioConfig::load();
//! let fonts = SystemFontResolver::new(&config.font_config());
//! let mut studio = Studio::new(config, fonts);
//!
//! studio.load_image("background.jpg")?;
//! studio.set_quote("Simplicity is prerequisite for reliability.");
//! studio.set_author("Edsger W. Dijkstra");
//! studio.set_style(Style::Noir);
//!
//! // Preview with the overlay box, then export without the preview shadow
//! if let Some(card) = studio.recompute() {
//!     println!("text box: {:?}", card.bbox);
//! }
//! studio.export("card.png")?;
//!
//! # Ok::<(), quotecard::QuotecardError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`style`] | Background filter pipelines |
//! | [`layout`] | Wrapping, measuring and block composition |
//! | [`render`] | Compositing text onto the styled background |
//! | [`bounds`] | Bounding box, clamp and hit-test |
//! | [`session`] | Interactive state around the render core |
//! | [`font`] | Font faces and font resolution |
//! | [`canvas`] / [`export`] | Raster load and save |
//! | [`config`] | Optional JSON settings |
//! | [`error`] | Error types |

pub mod bounds;
pub mod canvas;
pub mod config;
pub mod error;
pub mod export;
pub mod font;
pub mod layout;
pub mod logging;
pub mod render;
pub mod session;
pub mod shader;
pub mod style;
pub mod text;

// Re-exports for convenience
pub use bounds::{BoundingBox, Point, clamp, hit_test};
pub use canvas::Canvas;
pub use error::QuotecardError;
pub use render::{Composition, RenderMode, recompute};
pub use session::Studio;
pub use style::Style;
pub use text::TextSpec;
