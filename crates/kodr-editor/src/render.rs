//! Per-line render data for the line-numbered code view.

use crate::buffer::SourceBuffer;

/// One row of the code view underneath the overlay text area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    /// 1-based line number shown in the gutter.
    pub number: usize,
    /// Line text. Empty lines render as a single space so the row keeps its height.
    pub text: String,
    /// Whether this row is the highlighted line.
    pub highlighted: bool,
}

/// Build rows for every line of `buffer`, flagging `highlighted_line` (1-based) if present.
pub fn render_lines(buffer: &SourceBuffer, highlighted_line: Option<usize>) -> Vec<RenderedLine> {
    buffer
        .lines()
        .enumerate()
        .map(|(index, text)| {
            let number = index + 1;
            RenderedLine {
                number,
                text: if text.is_empty() { " ".to_string() } else { text },
                highlighted: highlighted_line == Some(number),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lines_numbers_and_highlight() {
        let buffer = SourceBuffer::from_text("a\n\nc");
        let rows = render_lines(&buffer, Some(3));

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].number, 1);
        assert_eq!(rows[1].text, " ");
        assert!(!rows[0].highlighted);
        assert!(rows[2].highlighted);
    }

    #[test]
    fn test_out_of_range_highlight_flags_nothing() {
        let buffer = SourceBuffer::from_text("a\nb");
        let rows = render_lines(&buffer, Some(7));
        assert!(rows.iter().all(|row| !row.highlighted));
    }
}
