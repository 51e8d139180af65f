//! Block measurement for stacked lines.

use crate::font::FontFace;

/// Size of a block of lines stacked top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockMetrics {
    /// Widest line
    pub width: u32,
    /// Sum of line heights plus spacing between lines
    pub height: u32,
    /// Height of each line, in order
    pub line_heights: Vec<u32>,
}

/// Measure `lines` stacked with `line_spacing` pixels between consecutive lines.
///
/// No lines measures as zero by zero.
pub fn measure_multiline<S: AsRef<str>>(
    lines: &[S],
    font: &dyn FontFace,
    line_spacing: u32,
) -> BlockMetrics {
    let mut width = 0;
    let mut line_heights = Vec::with_capacity(lines.len());

    for line in lines {
        let bounds = font.text_bounds(line.as_ref());
        width = width.max(bounds.width());
        line_heights.push(bounds.height());
    }

    let height = if line_heights.is_empty() {
        0
    } else {
        line_heights.iter().sum::<u32>() + line_spacing * (line_heights.len() as u32 - 1)
    };

    BlockMetrics {
        width,
        height,
        line_heights,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::BitmapFace;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_lines() {
        let metrics = measure_multiline::<&str>(&[], &BitmapFace::new(24), 10);
        assert_eq!(metrics, BlockMetrics::default());
    }

    #[test]
    fn test_single_line_has_no_spacing() {
        let metrics = measure_multiline(&["abc"], &BitmapFace::new(24), 10);
        assert_eq!(metrics.width, 36);
        assert_eq!(metrics.height, 24);
        assert_eq!(metrics.line_heights, vec![24]);
    }

    #[test]
    fn test_identical_lines_height_formula() {
        let font = BitmapFace::new(20);
        for n in 1..6u32 {
            let lines: Vec<String> = (0..n).map(|i| format!("line {}", i)).collect();
            let metrics = measure_multiline(&lines, &font, 7);
            assert_eq!(metrics.height, n * 20 + (n - 1) * 7);
        }
    }

    #[test]
    fn test_width_is_widest_line() {
        let metrics = measure_multiline(&["a", "abcd", "ab"], &BitmapFace::new(24), 6);
        assert_eq!(metrics.width, 48);
        assert_eq!(metrics.height, 3 * 24 + 2 * 6);
    }
}
