//! Blending and interpolation functions.

/// Linear interpolation between two values.
///
/// Returns `a` when `t=0`, `b` when `t=1`, and linear blend in between.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Alpha-composite a source channel over a destination channel.
///
/// `alpha` is the source coverage in [0, 1].
#[inline]
pub fn over(dst: u8, src: u8, alpha: f32) -> u8 {
    let alpha = alpha.clamp(0.0, 1.0);
    lerp(dst as f32, src as f32, alpha).round() as u8
}
