//! Greedy word wrapping against measured pixel widths.

use crate::font::FontFace;

/// Wrap `text` into lines no wider than `max_width` pixels.
///
/// Words are split on any whitespace and re-joined with single spaces. A word
/// that is wider than `max_width` on its own gets a line to itself rather than
/// being broken. Empty or whitespace-only input yields no lines.
pub fn wrap_text(text: &str, font: &dyn FontFace, max_width: u32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", line, word)
        };

        if font.text_bounds(&candidate).width() <= max_width {
            line = candidate;
        } else {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            line = word.to_string();
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
