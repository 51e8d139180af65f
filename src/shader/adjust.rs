//! Per-channel tone adjustments.
//!
//! Channel values are `f32` in the 0..=255 range so several adjustments can be
//! chained before quantizing back to `u8`.

/// Clamp a channel value to [0, 255].
#[inline]
pub fn clamp255(value: f32) -> f32 {
    value.clamp(0.0, 255.0)
}

/// Round and clamp a channel value into a `u8`.
#[inline]
pub fn quantize(value: f32) -> u8 {
    clamp255(value).round() as u8
}

/// ITU-R 601 luma in 16-bit fixed point.
///
/// The weights sum to 65536, so a gray pixel maps to itself exactly.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16) as u8
}

/// Adjust contrast around a center point.
///
/// # Parameters
/// - `value`: Input channel value [0, 255]
/// - `center`: The level that stays fixed (the image's mean luma)
/// - `amount`: Contrast multiplier (>1 increases, <1 decreases)
#[inline]
pub fn contrast(value: f32, center: f32, amount: f32) -> f32 {
    clamp255(center + (value - center) * amount)
}

/// Scale brightness toward black.
#[inline]
pub fn brightness(value: f32, factor: f32) -> f32 {
    clamp255(value * factor)
}

/// Push a channel away from (or toward) its pixel's gray level.
#[inline]
pub fn saturate(value: f32, gray: f32, amount: f32) -> f32 {
    clamp255(gray + (value - gray) * amount)
}

/// Unsharp-mask response for one channel.
///
/// Differences below `threshold` are left alone so flat areas keep their noise floor.
#[inline]
pub fn sharpen(value: f32, blurred: f32, percent: f32, threshold: f32) -> f32 {
    let diff = value - blurred;
    if diff.abs() >= threshold {
        clamp255(value + diff * percent / 100.0)
    } else {
        value
    }
}
