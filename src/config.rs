//! # Configuration
//!
//! Optional settings read from `$XDG_CONFIG_HOME/quotecard/config.json`
//! (or `~/.config/quotecard/config.json`). Every field has a default, and a
//! missing or broken file falls back to defaults with a warning.
//!
//! ```json
//! {
//!   "load_system_fonts": true,
//!   "font_dirs": ["/home/me/fonts"],
//!   "jpeg_quality": 95,
//!   "default_font_size": 64,
//!   "default_color": [255, 255, 255],
//!   "blank_canvas": { "width": 1200, "height": 800, "color": [40, 40, 40] }
//! }
//! ```

use std::path::{Path, PathBuf};

use image::Rgb;
use serde::Deserialize;

use crate::canvas::Canvas;
use crate::error::{QuotecardError, Result};
use crate::export::DEFAULT_JPEG_QUALITY;
use crate::font::FontConfig;

const APP_DIR: &str = "quotecard";
const APP_CONFIG_FILE: &str = "config.json";

/// Canvas used when no background image is given.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BlankCanvas {
    pub width: u32,
    pub height: u32,
    pub color: [u8; 3],
}

impl Default for BlankCanvas {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            color: [40, 40, 40],
        }
    }
}

impl BlankCanvas {
    pub fn to_canvas(&self) -> Canvas {
        Canvas::blank(self.width.max(1), self.height.max(1), Rgb(self.color))
    }
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    pub load_system_fonts: bool,
    pub font_dirs: Vec<PathBuf>,
    pub jpeg_quality: u8,
    pub default_font_size: u32,
    pub default_color: [u8; 3],
    pub blank_canvas: BlankCanvas,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            load_system_fonts: true,
            font_dirs: Vec::new(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            default_font_size: 64,
            default_color: [255, 255, 255],
            blank_canvas: BlankCanvas::default(),
        }
    }
}

impl StudioConfig {
    /// Load from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let (xdg_config_home, home) = config_env_dirs();
        match config_path(xdg_config_home.as_deref(), home.as_deref()) {
            Some(path) => Self::load_or_default(&path),
            None => Self::default(),
        }
    }

    /// Load from `path`; a missing file is not an error, a broken one is logged.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        Self::from_file(path).unwrap_or_else(|err| {
            tracing::warn!(%err, path = %path.display(), "ignoring config file; using defaults");
            Self::default()
        })
    }

    /// Strictly parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents)
            .map_err(|e| QuotecardError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Font lookup settings.
    pub fn font_config(&self) -> FontConfig {
        FontConfig {
            load_system_fonts: self.load_system_fonts,
            font_dirs: self.font_dirs.clone(),
        }
    }
}

fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

/// `<config root>/quotecard/config.json`, or `None` without any home directory.
fn config_path(xdg_config_home: Option<&Path>, home: Option<&Path>) -> Option<PathBuf> {
    let root = match xdg_config_home.filter(|p| !p.as_os_str().is_empty()) {
        Some(xdg) => xdg.to_path_buf(),
        None => home?.join(".config"),
    };
    Some(root.join(APP_DIR).join(APP_CONFIG_FILE))
}
