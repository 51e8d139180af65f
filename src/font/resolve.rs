//! Font resolution.
//!
//! A [`FontResolver`] turns a family preference list into a usable face. The
//! system resolver indexes installed fonts once with `fontdb` and is then
//! handed to every recompute pass; resolving walks the preferences, then a
//! list of common generic families, then the built-in bitmap face.

use std::path::{Path, PathBuf};

use fontdb::{Database, FaceInfo, Source};

use super::{BitmapFace, FontFace, TtfFace};

/// Families tried, in order, when none of the preferences are installed.
pub const GENERIC_FAMILIES: &[&str] = &["Arial", "DejaVu Sans", "Verdana", "Helvetica", "FreeSans"];

/// Maps a family preference list and pixel size to a face. Never fails.
pub trait FontResolver {
    fn resolve(&self, families: &[&str], pixel_size: u32) -> Box<dyn FontFace>;
}

impl<R: FontResolver + ?Sized> FontResolver for &R {
    fn resolve(&self, families: &[&str], pixel_size: u32) -> Box<dyn FontFace> {
        (**self).resolve(families, pixel_size)
    }
}

/// Resolver that always hands out the built-in bitmap face.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFontResolver;

impl FontResolver for BuiltinFontResolver {
    fn resolve(&self, _families: &[&str], pixel_size: u32) -> Box<dyn FontFace> {
        Box::new(BitmapFace::new(pixel_size))
    }
}

/// Where the system resolver looks for fonts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontConfig {
    /// Whether to scan the platform's standard font directories
    pub load_system_fonts: bool,
    /// Additional directories to scan
    pub font_dirs: Vec<PathBuf>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            load_system_fonts: true,
            font_dirs: Vec::new(),
        }
    }
}

/// Resolver backed by an index of installed font files.
pub struct SystemFontResolver {
    db: Database,
}

impl std::fmt::Debug for SystemFontResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemFontResolver")
            .field("faces", &self.db.len())
            .finish()
    }
}

impl SystemFontResolver {
    /// Build the font index. This scans the filesystem, so do it once.
    pub fn new(config: &FontConfig) -> Self {
        let mut db = Database::new();
        if config.load_system_fonts {
            db.load_system_fonts();
        }
        for dir in &config.font_dirs {
            db.load_fonts_dir(dir);
        }
        tracing::debug!(faces = db.len(), "font index built");
        Self { db }
    }

    /// Wrap an already populated database.
    pub fn from_database(db: Database) -> Self {
        Self { db }
    }

    /// Number of indexed faces.
    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    /// Best indexed face for one family name, if any.
    fn find(&self, family: &str) -> Option<&FaceInfo> {
        let key = normalize(family);
        if key.is_empty() {
            return None;
        }

        let mut best: Option<(u8, &FaceInfo)> = None;
        for face in self.db.faces() {
            let Some(rank) = match_rank(face, &key) else {
                continue;
            };
            if best.is_none_or(|(current, _)| rank < current) {
                best = Some((rank, face));
            }
        }
        best.map(|(_, face)| face)
    }

    fn load(&self, face: &FaceInfo, pixel_size: u32) -> Option<TtfFace> {
        let name = face
            .families
            .first()
            .map(|(family, _)| family.clone())
            .unwrap_or_else(|| face.post_script_name.clone());
        self.db
            .with_face_data(face.id, |data, index| {
                TtfFace::from_vec(data.to_vec(), index, pixel_size, name)
            })
            .flatten()
    }
}

impl FontResolver for SystemFontResolver {
    fn resolve(&self, families: &[&str], pixel_size: u32) -> Box<dyn FontFace> {
        for family in families.iter().chain(GENERIC_FAMILIES) {
            let Some(face) = self.find(family) else {
                continue;
            };
            match self.load(face, pixel_size) {
                Some(ttf) => {
                    tracing::debug!(requested = family, face = ttf.name(), "resolved font");
                    return Box::new(ttf);
                }
                None => {
                    tracing::debug!(requested = family, "font data unusable, trying next");
                }
            }
        }

        tracing::warn!(?families, "no installed font matched; using built-in bitmap font");
        Box::new(BitmapFace::new(pixel_size))
    }
}

/// Lowercase with whitespace removed.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Rank how well `face` matches a normalized family key; lower is better.
///
/// Exact family names beat substring matches, which beat file-name matches.
/// Regular upright faces beat bold or italic ones within each tier.
fn match_rank(face: &FaceInfo, key: &str) -> Option<u8> {
    let families: Vec<String> = face.families.iter().map(|(f, _)| normalize(f)).collect();

    let tier = if families.iter().any(|f| f == key) {
        0
    } else if families.iter().any(|f| f.contains(key)) {
        2
    } else if source_file_name(&face.source).is_some_and(|name| normalize(&name).contains(key)) {
        4
    } else {
        return None;
    };

    let regular = face.weight == fontdb::Weight::NORMAL && face.style == fontdb::Style::Normal;
    Some(if regular { tier } else { tier + 1 })
}

fn source_file_name(source: &Source) -> Option<String> {
    let path: &Path = match source {
        Source::File(path) => path,
        Source::SharedFile(path, _) => path,
        Source::Binary(_) => return None,
    };
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}
