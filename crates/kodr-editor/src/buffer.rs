//! Source buffer
//!
//! The single owned copy of the document text, stored in a Rope so line lookups stay O(log N).
//! All offsets are character offsets (Unicode scalar values), and only `'\n'` separates lines:
//! N newlines always produce N+1 lines, including a trailing empty line.

use ropey::Rope;
use std::ops::Range;

/// Owned, mutable document text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceBuffer {
    rope: Rope,
}

impl SourceBuffer {
    /// Create an empty buffer (one empty line).
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Build a buffer from text.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Total character count.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Returns `true` if the buffer holds no characters.
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Total line count (never zero).
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Character offset of the first character of `line`.
    ///
    /// Lines past the end map to the end of the buffer.
    pub fn line_start(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        self.rope.line_to_char(line)
    }

    /// Length of `line` in characters, excluding its `'\n'`.
    pub fn line_len(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return 0;
        }

        let start = self.rope.line_to_char(line);
        let end = if line + 1 < self.rope.len_lines() {
            self.rope.line_to_char(line + 1) - 1
        } else {
            self.rope.len_chars()
        };
        end - start
    }

    /// Text of `line` without its trailing `'\n'`.
    pub fn line_text(&self, line: usize) -> Option<String> {
        if line >= self.rope.len_lines() {
            return None;
        }

        let mut text = self.rope.line(line).to_string();
        if text.ends_with('\n') {
            text.pop();
        }
        Some(text)
    }

    /// Returns `true` if `line` begins with `prefix`.
    pub fn line_starts_with(&self, line: usize, prefix: &str) -> bool {
        if line >= self.rope.len_lines() {
            return false;
        }

        let mut chars = self.rope.line(line).chars();
        prefix.chars().all(|expected| chars.next() == Some(expected))
    }

    /// Zero-based line containing `offset` (clamped to the buffer).
    pub fn line_of_offset(&self, offset: usize) -> usize {
        self.rope.char_to_line(offset.min(self.rope.len_chars()))
    }

    /// Convert a character offset into `(line, column)`.
    pub fn offset_to_line_column(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(offset);
        (line, offset - self.rope.line_to_char(line))
    }

    /// Convert `(line, column)` into a character offset, clamping both coordinates.
    pub fn line_column_to_offset(&self, line: usize, column: usize) -> usize {
        if line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        self.rope.line_to_char(line) + column.min(self.line_len(line))
    }

    /// Insert `text` at `offset` (clamped). Returns the clamped offset actually used.
    pub fn insert(&mut self, offset: usize, text: &str) -> usize {
        let offset = offset.min(self.rope.len_chars());
        self.rope.insert(offset, text);
        offset
    }

    /// Remove `range` (clamped) and return the removed text.
    pub fn remove(&mut self, range: Range<usize>) -> String {
        let len = self.rope.len_chars();
        let start = range.start.min(len);
        let end = range.end.clamp(start, len);
        if start == end {
            return String::new();
        }

        let removed = self.rope.slice(start..end).to_string();
        self.rope.remove(start..end);
        removed
    }

    /// Text in `range` (clamped).
    pub fn slice(&self, range: Range<usize>) -> String {
        let len = self.rope.len_chars();
        let start = range.start.min(len);
        let end = range.end.clamp(start, len);
        self.rope.slice(start..end).to_string()
    }

    /// Replace the whole content.
    pub fn replace_all(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
    }

    /// Complete text.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Iterate over line texts (without `'\n'`).
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.rope.lines().map(|line| {
            let mut text = line.to_string();
            if text.ends_with('\n') {
                text.pop();
            }
            text
        })
    }
}
