//! # Styles
//!
//! A style is a named, deterministic pixel pipeline applied to the background
//! before any text is drawn. Each style also carries the font families it
//! prefers, in priority order.
//!
//! | Style | Pipeline |
//! |-------|----------|
//! | None | identity |
//! | Epic | contrast ×1.5, Gaussian blur r=3 |
//! | Noir | grayscale |
//! | Fancy | saturation ×1.6 |
//! | Cyberpunk | swap R/B, saturation ×1.2, contrast ×1.1 |
//! | Phonk | brightness ×0.75, 20% (40,0,60) overlay, contrast ×1.1 |
//! | Tech | unsharp mask r=2, 200%, threshold 3 |
//!
//! ## Example
//!
//! ```
//! use image::{Rgb, RgbImage};
//! use quotecard::style::Style;
//!
//! let img = RgbImage::from_pixel(8, 8, Rgb([200, 40, 90]));
//! let noir = Style::Noir.apply(&img);
//! assert!(noir.pixels().all(|p| p.0[0] == p.0[1] && p.0[1] == p.0[2]));
//! ```

pub mod enhance;

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};

use crate::error::QuotecardError;

/// Overlay color used by the Phonk style.
const PHONK_OVERLAY: Rgb<u8> = Rgb([40, 0, 60]);

/// Named background treatment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    None,
    Epic,
    Noir,
    Fancy,
    Cyberpunk,
    Phonk,
    Tech,
}

impl Style {
    /// Every style, in menu order.
    pub const ALL: [Style; 7] = [
        Style::None,
        Style::Epic,
        Style::Noir,
        Style::Fancy,
        Style::Cyberpunk,
        Style::Phonk,
        Style::Tech,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Style::None => "None",
            Style::Epic => "Epic",
            Style::Noir => "Noir",
            Style::Fancy => "Fancy",
            Style::Cyberpunk => "Cyberpunk",
            Style::Phonk => "Phonk",
            Style::Tech => "Tech",
        }
    }

    /// Preferred font families for text drawn over this style.
    pub fn font_families(self) -> &'static [&'static str] {
        match self {
            Style::None => &["Arial", "DejaVu Sans", "Verdana", "Helvetica"],
            Style::Epic => &["Impact", "Anton", "Bebas Neue", "Arial Black", "DejaVu Sans"],
            Style::Noir => &["Georgia", "Times New Roman", "DejaVu Serif", "Merriweather"],
            Style::Fancy => &[
                "Pacifico",
                "Brush Script",
                "Lobster",
                "Segoe Script",
                "Gabriola",
                "DejaVu Sans",
            ],
            Style::Cyberpunk => &[
                "Orbitron",
                "Eurostile",
                "Agency FB",
                "Bank Gothic",
                "Audiowide",
                "DejaVu Sans",
            ],
            Style::Phonk => &[
                "Futura",
                "Avenir",
                "Montserrat",
                "Poppins",
                "Gotham",
                "DejaVu Sans",
            ],
            Style::Tech => &[
                "Consolas",
                "Courier New",
                "Inconsolata",
                "DejaVu Sans Mono",
                "SF Mono",
                "DejaVu Sans",
            ],
        }
    }

    /// Whether the live preview draws a drop shadow under the text.
    pub fn wants_preview_shadow(self) -> bool {
        matches!(self, Style::Epic | Style::Noir)
    }

    /// Run this style's pipeline on `img`, returning a new image.
    pub fn apply(self, img: &RgbImage) -> RgbImage {
        match self {
            Style::None => img.clone(),
            Style::Epic => {
                let img = enhance::contrast(img, 1.5);
                enhance::gaussian_blur(&img, 3.0)
            }
            Style::Noir => enhance::grayscale(img),
            Style::Fancy => enhance::saturation(img, 1.6),
            Style::Cyberpunk => {
                let img = enhance::swap_red_blue(img);
                let img = enhance::saturation(&img, 1.2);
                enhance::contrast(&img, 1.1)
            }
            Style::Phonk => {
                let img = enhance::brightness(img, 0.75);
                let img = enhance::blend_solid(&img, PHONK_OVERLAY, 0.2);
                enhance::contrast(&img, 1.1)
            }
            Style::Tech => enhance::unsharp_mask(img, 2.0, 200.0, 3),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = QuotecardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| QuotecardError::Parse(format!("unknown style '{}'", s)))
    }
}
