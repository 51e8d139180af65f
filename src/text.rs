//! # Text Parameters
//!
//! [`TextSpec`] is everything the user controls about the overlay: the words,
//! their size and color, the background style and where the block sits.

use std::ops::RangeInclusive;

use image::Rgb;
use serde::{Deserialize, Serialize};

use crate::bounds::Point;
use crate::error::{QuotecardError, Result};
use crate::style::Style;

/// Accepted font sizes in pixels.
pub const FONT_SIZE_RANGE: RangeInclusive<u32> = 10..=200;

/// User-editable text overlay parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextSpec {
    pub quote: String,
    pub author: String,
    pub font_size: u32,
    pub color: [u8; 3],
    pub style: Style,
    /// Top-left of the text block in canvas pixels
    pub anchor: Point,
}

impl Default for TextSpec {
    fn default() -> Self {
        Self {
            quote: String::new(),
            author: String::new(),
            font_size: 64,
            color: [255, 255, 255],
            style: Style::None,
            anchor: Point::new(60, 60),
        }
    }
}

impl TextSpec {
    /// Fill color as a pixel.
    pub fn rgb(&self) -> Rgb<u8> {
        Rgb(self.color)
    }

    /// Reject values no control could have produced.
    pub fn validate(&self) -> Result<()> {
        if !FONT_SIZE_RANGE.contains(&self.font_size) {
            return Err(QuotecardError::InvalidSpec(format!(
                "font size {} outside {}..={}",
                self.font_size,
                FONT_SIZE_RANGE.start(),
                FONT_SIZE_RANGE.end()
            )));
        }
        Ok(())
    }
}

/// A partial [`TextSpec`], as read from a spec file.
///
/// Only the fields present are applied, so a file without an anchor keeps
/// whatever anchor the session already has.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TextSpecPatch {
    pub quote: Option<String>,
    pub author: Option<String>,
    pub font_size: Option<u32>,
    pub color: Option<[u8; 3]>,
    pub style: Option<Style>,
    pub anchor: Option<Point>,
}

impl TextSpecPatch {
    /// Overwrite the fields of `spec` that this patch sets.
    pub fn apply(self, spec: &mut TextSpec) {
        if let Some(quote) = self.quote {
            spec.quote = quote;
        }
        if let Some(author) = self.author {
            spec.author = author;
        }
        if let Some(size) = self.font_size {
            spec.font_size = size;
        }
        if let Some(color) = self.color {
            spec.color = color;
        }
        if let Some(style) = self.style {
            spec.style = style;
        }
        if let Some(anchor) = self.anchor {
            spec.anchor = anchor;
        }
    }
}

/// Clamp a requested font size into [`FONT_SIZE_RANGE`].
pub fn clamp_font_size(size: u32) -> u32 {
    size.clamp(*FONT_SIZE_RANGE.start(), *FONT_SIZE_RANGE.end())
}

/// Parse `#rrggbb`, `rrggbb` or `r,g,b`.
pub fn parse_color(s: &str) -> Result<[u8; 3]> {
    let s = s.trim();
    let bad = || QuotecardError::Parse(format!("invalid color '{}'", s));

    if s.contains(',') {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [r, g, b] = parts.as_slice() else {
            return Err(bad());
        };
        let channel = |p: &str| p.parse::<u8>().map_err(|_| bad());
        return Ok([channel(*r)?, channel(*g)?, channel(*b)?]);
    }

    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(bad());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
    Ok([channel(0)?, channel(2)?, channel(4)?])
}

/// Parse `x,y` into a point.
pub fn parse_point(s: &str) -> Result<Point> {
    let bad = || QuotecardError::Parse(format!("invalid point '{}', expected X,Y", s));
    let (x, y) = s.split_once(',').ok_or_else(bad)?;
    let x = x.trim().parse().map_err(|_| bad())?;
    let y = y.trim().parse().map_err(|_| bad())?;
    Ok(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_spec_is_valid() {
        let spec = TextSpec::default();
        assert!(spec.validate().is_ok());
        assert_eq!(spec.rgb(), Rgb([255, 255, 255]));
    }

    #[test]
    fn test_font_size_bounds() {
        let mut spec = TextSpec::default();
        spec.font_size = 10;
        assert!(spec.validate().is_ok());
        spec.font_size = 200;
        assert!(spec.validate().is_ok());
        spec.font_size = 9;
        assert!(matches!(spec.validate(), Err(QuotecardError::InvalidSpec(_))));
        spec.font_size = 201;
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_clamp_font_size() {
        assert_eq!(clamp_font_size(0), 10);
        assert_eq!(clamp_font_size(64), 64);
        assert_eq!(clamp_font_size(999), 200);
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#ff8000").unwrap(), [255, 128, 0]);
        assert_eq!(parse_color("00FF7f").unwrap(), [0, 255, 127]);
        assert_eq!(parse_color(" 12, 34 ,56 ").unwrap(), [12, 34, 56]);
        assert!(parse_color("#fff").is_err());
        assert!(parse_color("1,2").is_err());
        assert!(parse_color("1,2,300").is_err());
        assert!(parse_color("#gg0000").is_err());
        assert!(parse_color("#éé000").is_err());
    }

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("60,40").unwrap(), Point::new(60, 40));
        assert_eq!(parse_point(" -5 , 7 ").unwrap(), Point::new(-5, 7));
        assert!(parse_point("60").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn test_spec_from_partial_json() {
        let spec: TextSpec =
            serde_json::from_str(r#"{ "quote": "Hi", "style": "noir", "anchor": { "x": 5, "y": 6 } }"#)
                .unwrap();
        assert_eq!(spec.quote, "Hi");
        assert_eq!(spec.style, Style::Noir);
        assert_eq!(spec.anchor, Point::new(5, 6));
        assert_eq!(spec.font_size, 64);
    }

    #[test]
    fn test_patch_without_anchor_keeps_base() {
        let patch: TextSpecPatch =
            serde_json::from_str(r#"{ "quote": "Hi", "font_size": 32 }"#).unwrap();
        let mut spec = TextSpec {
            anchor: Point::new(60, 40),
            style: Style::Noir,
            ..TextSpec::default()
        };
        patch.apply(&mut spec);
        assert_eq!(spec.anchor, Point::new(60, 40));
        assert_eq!(spec.style, Style::Noir);
        assert_eq!(spec.quote, "Hi");
        assert_eq!(spec.font_size, 32);

        let moved: TextSpecPatch = serde_json::from_str(r#"{ "anchor": { "x": 5, "y": 6 } }"#).unwrap();
        moved.apply(&mut spec);
        assert_eq!(spec.anchor, Point::new(5, 6));
        assert_eq!(spec.quote, "Hi");
    }
}
