//! # Shader Primitives
//!
//! Per-channel building blocks shared by the style filters and the text
//! compositor. Everything here works on single channel values so the
//! image-level code stays a thin loop around these functions.
//!
//! - [`adjust`]: Contrast, brightness, saturation, luma, unsharp response
//! - [`blend`]: Linear interpolation and coverage compositing

pub mod adjust;
pub mod blend;

pub use adjust::*;
pub use blend::*;
