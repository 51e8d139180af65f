//! Image-level enhancement operations used by the style pipelines.
//!
//! Each enhancement interpolates between a "degenerate" image and the input:
//! a factor of 1.0 returns the input, 0.0 returns the degenerate image, and
//! larger factors extrapolate away from it.
//!
//! | Operation | Degenerate image |
//! |-----------|------------------|
//! | [`contrast`] | flat gray at the mean luma |
//! | [`saturation`] | per-pixel luma |
//! | [`brightness`] | black |
//!
//! None of these mutate their input.

use image::{Rgb, RgbImage, imageops};

use crate::shader::{self, luma, quantize};

/// Apply `f` to every channel of every pixel.
fn map_channels(img: &RgbImage, f: impl Fn(f32) -> f32) -> RgbImage {
    let mut out = img.clone();
    for px in out.pixels_mut() {
        for c in px.0.iter_mut() {
            *c = quantize(f(*c as f32));
        }
    }
    out
}

/// Mean luma of the whole image, rounded to an integer level.
pub fn mean_luma(img: &RgbImage) -> u8 {
    let count = img.width() as u64 * img.height() as u64;
    if count == 0 {
        return 0;
    }
    let sum: u64 = img
        .pixels()
        .map(|Rgb([r, g, b])| luma(*r, *g, *b) as u64)
        .sum();
    ((sum as f64 / count as f64) + 0.5) as u8
}

/// Contrast enhancement around the image's mean luma.
pub fn contrast(img: &RgbImage, factor: f32) -> RgbImage {
    let center = mean_luma(img) as f32;
    map_channels(img, |v| shader::contrast(v, center, factor))
}

/// Brightness scaling toward black.
pub fn brightness(img: &RgbImage, factor: f32) -> RgbImage {
    map_channels(img, |v| shader::brightness(v, factor))
}

/// Color saturation around each pixel's own luma.
pub fn saturation(img: &RgbImage, factor: f32) -> RgbImage {
    let mut out = img.clone();
    for px in out.pixels_mut() {
        let Rgb([r, g, b]) = *px;
        let gray = luma(r, g, b) as f32;
        for c in px.0.iter_mut() {
            *c = quantize(shader::saturate(*c as f32, gray, factor));
        }
    }
    out
}

/// Luma projection, re-expanded to three equal channels.
pub fn grayscale(img: &RgbImage) -> RgbImage {
    let mut out = img.clone();
    for px in out.pixels_mut() {
        let Rgb([r, g, b]) = *px;
        let y = luma(r, g, b);
        *px = Rgb([y, y, y]);
    }
    out
}

/// Exchange the red and blue channels.
pub fn swap_red_blue(img: &RgbImage) -> RgbImage {
    let mut out = img.clone();
    for px in out.pixels_mut() {
        px.0.swap(0, 2);
    }
    out
}

/// Blend a solid color over the whole image with the given opacity.
pub fn blend_solid(img: &RgbImage, color: Rgb<u8>, alpha: f32) -> RgbImage {
    let mut out = img.clone();
    for px in out.pixels_mut() {
        for (c, overlay) in px.0.iter_mut().zip(color.0) {
            *c = quantize(shader::lerp(*c as f32, overlay as f32, alpha));
        }
    }
    out
}

/// Gaussian blur with the radius used as the standard deviation.
pub fn gaussian_blur(img: &RgbImage, radius: f32) -> RgbImage {
    imageops::blur(img, radius)
}

/// Unsharp mask: add back `percent`% of the detail lost to a Gaussian blur.
///
/// Channels whose detail is below `threshold` levels are left untouched.
pub fn unsharp_mask(img: &RgbImage, radius: f32, percent: f32, threshold: u8) -> RgbImage {
    let blurred = imageops::blur(img, radius);
    let mut out = img.clone();
    for (px, soft) in out.pixels_mut().zip(blurred.pixels()) {
        for (c, b) in px.0.iter_mut().zip(soft.0) {
            *c = quantize(shader::sharpen(
                *c as f32,
                b as f32,
                percent,
                threshold as f32,
            ));
        }
    }
    out
}
