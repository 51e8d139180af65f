//! Built-in bitmap face.
//!
//! Uses the Spleen bitmap font family compiled into the binary, so a
//! renderable font exists even on systems with no fonts installed. Glyphs are
//! scaled nearest-neighbour from the closest master to the requested size.

use image::{Rgb, RgbImage};
use spleen_font::{FONT_6X12, FONT_8X16, FONT_12X24, PSF2Font};

use super::{FontFace, TextBounds, plot};

/// One of the embedded Spleen masters.
#[derive(Debug, Clone, Copy)]
struct Master {
    data: &'static [u8],
    width: usize,
    height: usize,
}

const SPLEEN_6X12: Master = Master {
    data: FONT_6X12,
    width: 6,
    height: 12,
};

const SPLEEN_8X16: Master = Master {
    data: FONT_8X16,
    width: 8,
    height: 16,
};

const SPLEEN_12X24: Master = Master {
    data: FONT_12X24,
    width: 12,
    height: 24,
};

/// Monospaced bitmap face at a fixed pixel size.
#[derive(Debug, Clone)]
pub struct BitmapFace {
    master: Master,
    cell_width: usize,
    cell_height: usize,
    name: String,
}

impl BitmapFace {
    /// Create a face whose character cells are `pixel_size` pixels tall.
    pub fn new(pixel_size: u32) -> Self {
        let cell_height = pixel_size.max(1) as usize;
        let master = if cell_height >= 24 {
            SPLEEN_12X24
        } else if cell_height >= 16 {
            SPLEEN_8X16
        } else {
            SPLEEN_6X12
        };
        let cell_width = ((master.width * cell_height) as f32 / master.height as f32)
            .round()
            .max(1.0) as usize;

        Self {
            master,
            cell_width,
            cell_height,
            name: format!("Spleen {}x{}", master.width, master.height),
        }
    }

    /// Width of one character cell.
    pub fn cell_width(&self) -> usize {
        self.cell_width
    }

    /// Height of one character cell.
    pub fn cell_height(&self) -> usize {
        self.cell_height
    }

    /// Scaled glyph bitmap for `ch`: `cell_width * cell_height` bytes, 1 = ink.
    fn glyph(&self, ch: char) -> Vec<u8> {
        let Master {
            data,
            width,
            height,
        } = self.master;
        let mut src = vec![0u8; width * height];

        let mut found = false;
        if let Ok(mut spleen) = PSF2Font::new(data) {
            let utf8 = ch.to_string();
            if let Some(rows) = spleen.glyph_for_utf8(utf8.as_bytes()) {
                found = true;
                for (row_y, row) in rows.enumerate() {
                    for (col_x, on) in row.enumerate() {
                        if row_y < height && col_x < width && on {
                            src[row_y * width + col_x] = 1;
                        }
                    }
                }
            }
        }
        if !found {
            draw_box(&mut src, width, height);
        }

        let mut glyph = vec![0u8; self.cell_width * self.cell_height];
        scale_bitmap(
            &src,
            width,
            height,
            &mut glyph,
            self.cell_width,
            self.cell_height,
        );
        glyph
    }
}

impl FontFace for BitmapFace {
    fn name(&self) -> &str {
        &self.name
    }

    fn text_bounds(&self, text: &str) -> TextBounds {
        let chars = text.chars().count();
        if chars == 0 {
            return TextBounds::default();
        }
        TextBounds {
            left: 0,
            top: 0,
            right: (chars * self.cell_width) as i32,
            bottom: self.cell_height as i32,
        }
    }

    fn draw_text(&self, target: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>) {
        for (i, ch) in text.chars().enumerate() {
            if ch == ' ' {
                continue;
            }
            let origin_x = x.saturating_add((i * self.cell_width) as i32);
            let glyph = self.glyph(ch);
            for gy in 0..self.cell_height {
                for gx in 0..self.cell_width {
                    if glyph[gy * self.cell_width + gx] != 0 {
                        plot(
                            target,
                            origin_x.saturating_add(gx as i32),
                            y.saturating_add(gy as i32),
                            color,
                            1.0,
                        );
                    }
                }
            }
        }
    }
}

/// Scale a bitmap from src dimensions to dst dimensions using nearest neighbor.
fn scale_bitmap(
    src: &[u8],
    src_w: usize,
    src_h: usize,
    dst: &mut [u8],
    dst_w: usize,
    dst_h: usize,
) {
    for dy in 0..dst_h {
        for dx in 0..dst_w {
            let sx = dx * src_w / dst_w;
            let sy = dy * src_h / dst_h;
            let src_idx = sy * src_w + sx;
            let dst_idx = dy * dst_w + dx;
            if src_idx < src.len() && dst_idx < dst.len() {
                dst[dst_idx] = src[src_idx];
            }
        }
    }
}

/// Draw a box outline in the glyph buffer.
fn draw_box(glyph: &mut [u8], width: usize, height: usize) {
    for x in 0..width {
        glyph[x] = 1;
        glyph[(height - 1) * width + x] = 1;
    }
    for y in 0..height {
        glyph[y * width] = 1;
        glyph[y * width + width - 1] = 1;
    }
}
