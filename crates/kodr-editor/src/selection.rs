//! Caret and selection types.

use std::cmp::Ordering;

/// Position coordinates (line and column numbers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Zero-based logical line index.
    pub line: usize,
    /// Zero-based column in characters within the logical line.
    pub column: usize,
}

impl Position {
    /// Create a new logical position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.column.cmp(&other.column))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// An ordered `[start, end]` pair of character offsets.
///
/// `start <= end` always holds; `start == end` is a caret. Bounds against the buffer length are
/// enforced by [`SelectionRange::clamped`], which every editor operation goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionRange {
    start: usize,
    end: usize,
}

impl SelectionRange {
    /// Build a range from two offsets in either order.
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// A caret at `offset`.
    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Inclusive start offset.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Exclusive end offset.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Selected character count.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` for a caret.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Clamp both ends into `0..=len`.
    pub fn clamped(self, len: usize) -> Self {
        Self {
            start: self.start.min(len),
            end: self.end.min(len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_orders_offsets() {
        let range = SelectionRange::new(9, 3);
        assert_eq!(range.start(), 3);
        assert_eq!(range.end(), 9);
        assert_eq!(range.len(), 6);
        assert!(!range.is_empty());
    }

    #[test]
    fn test_clamped_keeps_order() {
        let range = SelectionRange::new(4, 20).clamped(10);
        assert_eq!(range, SelectionRange::new(4, 10));

        let range = SelectionRange::new(15, 20).clamped(10);
        assert_eq!(range, SelectionRange::caret(10));
    }

    #[test]
    fn test_position_ordering() {
        assert!(Position::new(0, 9) < Position::new(1, 0));
        assert!(Position::new(2, 1) > Position::new(2, 0));
    }
}
