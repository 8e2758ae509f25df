//! Monospace measurement and pointer mapping.
//!
//! The editor is drawn as a transparent text area over a line-numbered code view, so a pointer
//! event only carries pixel coordinates. This module maps those back to character offsets under
//! a monospace assumption: every row is `line_height_px` tall and every cell `char_width_px`
//! wide, with the text starting after a `gutter_width_px` line-number gutter.
//!
//! The column is a plain character index: every character, tabs and wide characters included,
//! counts as one cell.

use crate::buffer::SourceBuffer;

/// Pixel metrics of the rendered editor surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickGeometry {
    /// Height of one text row in pixels.
    pub line_height_px: f32,
    /// Width of one monospace cell in pixels.
    pub char_width_px: f32,
    /// Horizontal space taken by the line-number gutter in pixels.
    pub gutter_width_px: f32,
}

impl ClickGeometry {
    /// Create a geometry from explicit metrics.
    pub fn new(line_height_px: f32, char_width_px: f32, gutter_width_px: f32) -> Self {
        Self {
            line_height_px,
            char_width_px,
            gutter_width_px,
        }
    }
}

impl Default for ClickGeometry {
    /// `1.75rem` rows, a 14px monospace face and a `4rem` gutter.
    fn default() -> Self {
        Self::new(28.0, 8.4, 64.0)
    }
}

/// `floor(distance / size)`, clamped to `0` for negative, non-finite or degenerate input.
fn cell_index(distance: f32, size: f32) -> usize {
    if !distance.is_finite() || !size.is_finite() || size <= 0.0 || distance <= 0.0 {
        return 0;
    }
    // Float-to-int `as` saturates, so huge coordinates land on usize::MAX and get clamped below.
    (distance / size).floor() as usize
}

/// Map a pointer coordinate to an absolute character offset in `buffer`.
///
/// The row is `floor(y / line_height)` clamped to the last line; the column is
/// `floor((x - gutter) / char_width)` clamped to the line's length. The result is the row's start
/// offset plus the column, so it never exceeds the buffer length.
pub fn resolve_click_position(
    buffer: &SourceBuffer,
    x: f32,
    y: f32,
    geometry: &ClickGeometry,
) -> usize {
    let last_line = buffer.line_count().saturating_sub(1);
    let line = cell_index(y, geometry.line_height_px).min(last_line);
    let column = cell_index(x - geometry.gutter_width_px, geometry.char_width_px)
        .min(buffer.line_len(line));

    buffer.line_start(line) + column
}
