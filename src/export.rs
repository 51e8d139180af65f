//! # Export
//!
//! Writes composed rasters to disk.
//!
//! | Extension | Encoding |
//! |-----------|----------|
//! | `.jpg`, `.jpeg` | JPEG at the configured quality (95 by default) |
//! | anything else | PNG, best compression, adaptive filtering |
//! | none | PNG, with `.png` appended to the path |

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, RgbImage};

use crate::error::Result;

/// Default JPEG quality.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Output encoding picked from a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
}

impl OutputFormat {
    /// Format for `path`, plus the path actually written.
    pub fn for_path(path: &Path) -> (Self, PathBuf) {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") => {
                (OutputFormat::Jpeg, path.to_path_buf())
            }
            Some(_) => (OutputFormat::Png, path.to_path_buf()),
            None => (OutputFormat::Png, path.with_extension("png")),
        }
    }
}

/// Save `image` to `path`, returning the path written.
///
/// A partially written file is left in place if encoding fails.
pub fn save(image: &RgbImage, path: impl AsRef<Path>, jpeg_quality: u8) -> Result<PathBuf> {
    let (format, path) = OutputFormat::for_path(path.as_ref());
    let writer = BufWriter::new(File::create(&path)?);
    let (width, height) = image.dimensions();

    match format {
        OutputFormat::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(writer, jpeg_quality.clamp(1, 100));
            encoder.write_image(image.as_raw(), width, height, ExtendedColorType::Rgb8)?;
        }
        OutputFormat::Png => {
            let encoder =
                PngEncoder::new_with_quality(writer, CompressionType::Best, FilterType::Adaptive);
            encoder.write_image(image.as_raw(), width, height, ExtendedColorType::Rgb8)?;
        }
    }

    tracing::info!(path = %path.display(), ?format, "saved output");
    Ok(path)
}
