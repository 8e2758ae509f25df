//! Command Interface Layer
//!
//! [`Editor`] owns the [`SourceBuffer`] and the [`SelectionRange`] and exposes the operations a
//! caret-based text input needs. Every operation is total: out-of-range offsets and coordinates
//! are clamped, never rejected, and the selection satisfies `0 <= start <= end <= len` after
//! each call.
//!
//! Hosts can call the methods directly or route input through [`EditorCommand`] and
//! [`Editor::execute`].
//!
//! # Example
//!
//! ```rust
//! use kodr_editor::{Editor, EditorCommand, SelectionRange};
//!
//! let mut editor = Editor::new("a\nb");
//! editor.execute(EditorCommand::SetSelection { start: 0, end: 3 });
//! editor.execute(EditorCommand::Indent);
//!
//! assert_eq!(editor.text(), "  a\n  b");
//! assert_eq!(editor.selection(), SelectionRange::new(2, 7));
//! ```

use crate::buffer::SourceBuffer;
use crate::delta::{TextDelta, TextDeltaEdit};
use crate::layout::{ClickGeometry, resolve_click_position};
use crate::render::{RenderedLine, render_lines};
use crate::selection::{Position, SelectionRange};

/// The fixed indentation unit inserted by indent and removed by outdent.
pub const INDENT_UNIT: &str = "  ";

const INDENT_UNIT_LEN: usize = 2;

/// Editor commands
#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    /// Replace the whole buffer (language switch, reset, clear).
    SetText {
        /// New buffer content.
        text: String,
        /// Selection after the replacement; `None` puts a caret at 0.
        selection: Option<SelectionRange>,
    },
    /// Typing/paste: replace the selection with `text`.
    InsertText {
        /// Text to insert.
        text: String,
    },
    /// Insert text at an explicit offset.
    Insert {
        /// Character offset to insert at.
        offset: usize,
        /// Text to insert.
        text: String,
    },
    /// Delete an explicit character range.
    Delete {
        /// Inclusive start offset.
        start: usize,
        /// Exclusive end offset.
        end: usize,
    },
    /// Delete the selection, or the character before the caret.
    Backspace,
    /// Indent every line touched by the selection.
    Indent,
    /// Outdent every line touched by the selection.
    Outdent,
    /// Set the selection (offsets in either order).
    SetSelection {
        /// One end of the selection.
        start: usize,
        /// The other end of the selection.
        end: usize,
    },
    /// Collapse the selection to a caret.
    MoveTo {
        /// Caret offset.
        offset: usize,
    },
    /// Place the caret under a pointer coordinate.
    ClickAt {
        /// Pointer x in pixels.
        x: f32,
        /// Pointer y in pixels.
        y: f32,
        /// Surface metrics used to resolve the coordinate.
        geometry: ClickGeometry,
    },
}

/// Command execution result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Success, buffer untouched.
    Success,
    /// Success, returns the resolved caret offset.
    Offset(usize),
    /// The buffer changed.
    Edited(TextDelta),
}

impl CommandResult {
    /// The text delta, if the command changed the buffer.
    pub fn text_delta(&self) -> Option<&TextDelta> {
        match self {
            CommandResult::Edited(delta) => Some(delta),
            CommandResult::Success | CommandResult::Offset(_) => None,
        }
    }
}

/// Overlay text editor state.
///
/// ```rust
/// use kodr_editor::Editor;
///
/// let mut editor = Editor::new("Hello");
/// editor.move_caret_to(5);
/// editor.insert_at_cursor(", World");
/// assert_eq!(editor.text(), "Hello, World");
/// assert_eq!(editor.selection().start(), 12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Editor {
    buffer: SourceBuffer,
    selection: SelectionRange,
    /// Incremented on every buffer mutation.
    version: u64,
    last_text_delta: Option<TextDelta>,
}

impl Editor {
    /// Create an editor seeded with `text`, caret at 0.
    pub fn new(text: &str) -> Self {
        Self {
            buffer: SourceBuffer::from_text(text),
            ..Self::default()
        }
    }

    /// Create an empty editor.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Read-only access to the buffer.
    pub fn buffer(&self) -> &SourceBuffer {
        &self.buffer
    }

    /// Get text content
    pub fn text(&self) -> String {
        self.buffer.text()
    }

    /// Text of a zero-based line.
    pub fn line_text(&self, line: usize) -> Option<String> {
        self.buffer.line_text(line)
    }

    /// Get total line count
    pub fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    /// Get total character count
    pub fn char_count(&self) -> usize {
        self.buffer.len_chars()
    }

    /// Current selection (a caret when empty).
    pub fn selection(&self) -> SelectionRange {
        self.selection
    }

    /// Logical position of `offset` (clamped).
    pub fn position_of(&self, offset: usize) -> Position {
        let (line, column) = self.buffer.offset_to_line_column(offset);
        Position::new(line, column)
    }

    /// Character offset of `position` (clamped).
    pub fn offset_of(&self, position: Position) -> usize {
        self.buffer
            .line_column_to_offset(position.line, position.column)
    }

    /// Buffer version, incremented after each mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Delta of the most recent buffer mutation.
    pub fn last_text_delta(&self) -> Option<&TextDelta> {
        self.last_text_delta.as_ref()
    }

    /// Rows for the line-numbered view.
    pub fn rendered_lines(&self, highlighted_line: Option<usize>) -> Vec<RenderedLine> {
        render_lines(&self.buffer, highlighted_line)
    }

    /// Execute command
    pub fn execute(&mut self, command: EditorCommand) -> CommandResult {
        match command {
            EditorCommand::SetText { text, selection } => CommandResult::Edited(
                self.set_text_with_selection(&text, selection.unwrap_or_default()),
            ),
            EditorCommand::InsertText { text } => edited(self.insert_at_cursor(&text)),
            EditorCommand::Insert { offset, text } => edited(self.insert(offset, &text)),
            EditorCommand::Delete { start, end } => edited(self.delete_range(start, end)),
            EditorCommand::Backspace => edited(self.backspace()),
            EditorCommand::Indent => CommandResult::Edited(self.indent_selection()),
            EditorCommand::Outdent => edited(self.outdent_selection()),
            EditorCommand::SetSelection { start, end } => {
                self.set_selection(start, end);
                CommandResult::Success
            }
            EditorCommand::MoveTo { offset } => {
                self.move_caret_to(offset);
                CommandResult::Success
            }
            EditorCommand::ClickAt { x, y, geometry } => {
                CommandResult::Offset(self.click_at(x, y, &geometry))
            }
        }
    }

    /// Set the selection; offsets may come in either order and are clamped.
    pub fn set_selection(&mut self, start: usize, end: usize) {
        self.selection = SelectionRange::new(start, end).clamped(self.buffer.len_chars());
    }

    /// Collapse the selection to a caret at `offset` (clamped).
    pub fn move_caret_to(&mut self, offset: usize) {
        self.selection = SelectionRange::caret(offset).clamped(self.buffer.len_chars());
    }

    /// Replace the buffer wholesale and put a caret at 0.
    pub fn set_text(&mut self, text: &str) -> TextDelta {
        self.set_text_with_selection(text, SelectionRange::default())
    }

    /// Replace the buffer wholesale with an explicit (clamped) selection.
    pub fn set_text_with_selection(&mut self, text: &str, selection: SelectionRange) -> TextDelta {
        let before = self.buffer.len_chars();
        let deleted_text = self.buffer.text();
        self.buffer.replace_all(text);
        self.selection = selection.clamped(self.buffer.len_chars());

        self.record(
            before,
            vec![TextDeltaEdit {
                start: 0,
                deleted_text,
                inserted_text: text.to_string(),
            }],
        )
    }

    /// Replace the selection with `text`; the caret lands right after the inserted text.
    ///
    /// Returns `None` when nothing changed (empty text over a caret).
    pub fn insert_at_cursor(&mut self, text: &str) -> Option<TextDelta> {
        let (start, end) = (self.selection.start(), self.selection.end());
        if text.is_empty() && start == end {
            return None;
        }

        let before = self.buffer.len_chars();
        let deleted_text = self.buffer.remove(start..end);
        self.buffer.insert(start, text);
        self.selection = SelectionRange::caret(start + text.chars().count());

        Some(self.record(
            before,
            vec![TextDeltaEdit {
                start,
                deleted_text,
                inserted_text: text.to_string(),
            }],
        ))
    }

    /// Insert `text` at `offset` (clamped).
    ///
    /// Selection ends at or after the insertion point move right by the inserted length.
    pub fn insert(&mut self, offset: usize, text: &str) -> Option<TextDelta> {
        if text.is_empty() {
            return None;
        }

        let before = self.buffer.len_chars();
        let at = self.buffer.insert(offset, text);
        let inserted = text.chars().count();
        let shift = |p: usize| if p >= at { p + inserted } else { p };
        self.selection = SelectionRange::new(
            shift(self.selection.start()),
            shift(self.selection.end()),
        );

        Some(self.record(
            before,
            vec![TextDeltaEdit {
                start: at,
                deleted_text: String::new(),
                inserted_text: text.to_string(),
            }],
        ))
    }

    /// Delete `[start, end)` (clamped, either order).
    ///
    /// Selection ends inside the deleted range collapse to its start; ends after it move left.
    pub fn delete_range(&mut self, start: usize, end: usize) -> Option<TextDelta> {
        let range = SelectionRange::new(start, end).clamped(self.buffer.len_chars());
        if range.is_empty() {
            return None;
        }

        let before = self.buffer.len_chars();
        let (a, b) = (range.start(), range.end());
        let deleted_text = self.buffer.remove(a..b);
        let map = |p: usize| {
            if p <= a {
                p
            } else if p >= b {
                p - (b - a)
            } else {
                a
            }
        };
        self.selection = SelectionRange::new(map(self.selection.start()), map(self.selection.end()));

        Some(self.record(
            before,
            vec![TextDeltaEdit {
                start: a,
                deleted_text,
                inserted_text: String::new(),
            }],
        ))
    }

    /// Delete the selection, or the single character before the caret.
    pub fn backspace(&mut self) -> Option<TextDelta> {
        let selection = self.selection;
        if selection.is_empty() {
            let caret = selection.start();
            if caret == 0 {
                return None;
            }
            self.delete_range(caret - 1, caret)
        } else {
            self.delete_range(selection.start(), selection.end())
        }
    }

    /// Prepend [`INDENT_UNIT`] to every line intersecting the selection.
    ///
    /// Both selection ends shift right by one unit per indented line at or before their own
    /// line, so the same characters stay selected.
    pub fn indent_selection(&mut self) -> TextDelta {
        let before = self.buffer.len_chars();
        let (first, last) = self.selected_lines();

        // Indenting never changes line numbers, so each line start is read from the live buffer.
        let edits: Vec<TextDeltaEdit> = (first..=last)
            .map(|line| {
                let at = self.buffer.insert(self.buffer.line_start(line), INDENT_UNIT);
                TextDeltaEdit {
                    start: at,
                    deleted_text: String::new(),
                    inserted_text: INDENT_UNIT.to_string(),
                }
            })
            .collect();

        let line_count = last - first + 1;
        self.selection = SelectionRange::new(
            self.selection.start() + INDENT_UNIT_LEN,
            self.selection.end() + INDENT_UNIT_LEN * line_count,
        );

        self.record(before, edits)
    }

    /// Remove one leading [`INDENT_UNIT`] from every intersecting line that starts with it.
    ///
    /// Lines without a full leading unit are untouched. Selection ends shift left by the number
    /// of characters removed before them. Returns `None` when no line had a unit to remove.
    pub fn outdent_selection(&mut self) -> Option<TextDelta> {
        let (first, last) = self.selected_lines();
        let (start, end) = (self.selection.start(), self.selection.end());

        // (line start before the edit, chars removed on that line)
        let plan: Vec<(usize, usize)> = (first..=last)
            .map(|line| {
                let removed = if self.buffer.line_starts_with(line, INDENT_UNIT) {
                    INDENT_UNIT_LEN
                } else {
                    0
                };
                (self.buffer.line_start(line), removed)
            })
            .collect();

        if plan.iter().all(|&(_, removed)| removed == 0) {
            return None;
        }

        let removed_before = |offset: usize| -> usize {
            plan.iter()
                .filter(|&&(line_start, _)| line_start <= offset)
                .map(|&(line_start, removed)| removed.min(offset - line_start))
                .sum()
        };
        let new_start = start.saturating_sub(removed_before(start));
        let new_end = end.saturating_sub(removed_before(end));

        let before = self.buffer.len_chars();
        // Bottom-up, so the recorded offsets stay valid when the edits are replayed in order.
        let edits: Vec<TextDeltaEdit> = plan
            .iter()
            .rev()
            .filter(|&&(_, removed)| removed > 0)
            .map(|&(line_start, removed)| TextDeltaEdit {
                start: line_start,
                deleted_text: self.buffer.remove(line_start..line_start + removed),
                inserted_text: String::new(),
            })
            .collect();

        self.selection = SelectionRange::new(new_start, new_end).clamped(self.buffer.len_chars());
        Some(self.record(before, edits))
    }

    /// Map a pointer coordinate to a character offset (see [`resolve_click_position`]).
    pub fn resolve_click_position(&self, x: f32, y: f32, geometry: &ClickGeometry) -> usize {
        resolve_click_position(&self.buffer, x, y, geometry)
    }

    /// Resolve a pointer coordinate and move the caret there.
    pub fn click_at(&mut self, x: f32, y: f32, geometry: &ClickGeometry) -> usize {
        let offset = self.resolve_click_position(x, y, geometry);
        self.move_caret_to(offset);
        offset
    }

    /// First and last zero-based lines intersecting the selection.
    fn selected_lines(&self) -> (usize, usize) {
        (
            self.buffer.line_of_offset(self.selection.start()),
            self.buffer.line_of_offset(self.selection.end()),
        )
    }

    fn record(&mut self, before_char_count: usize, edits: Vec<TextDeltaEdit>) -> TextDelta {
        self.version += 1;
        let delta = TextDelta {
            before_char_count,
            after_char_count: self.buffer.len_chars(),
            edits,
        };
        tracing::trace!(
            version = self.version,
            edits = delta.edits.len(),
            before = delta.before_char_count,
            after = delta.after_char_count,
            "buffer edited"
        );
        self.last_text_delta = Some(delta.clone());
        delta
    }
}

fn edited(delta: Option<TextDelta>) -> CommandResult {
    delta.map_or(CommandResult::Success, CommandResult::Edited)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_editor_has_caret_at_origin() {
        let editor = Editor::new("Hello\nWorld");
        assert_eq!(editor.line_count(), 2);
        assert_eq!(editor.selection(), SelectionRange::caret(0));
        assert_eq!(editor.version(), 0);
        assert!(editor.last_text_delta().is_none());
    }

    #[test]
    fn test_set_text_resets_selection() {
        let mut editor = Editor::new("abc");
        editor.set_selection(1, 3);

        let delta = editor.set_text("xy");
        assert_eq!(editor.text(), "xy");
        assert_eq!(editor.selection(), SelectionRange::caret(0));
        assert_eq!(delta.before_char_count, 3);
        assert_eq!(delta.after_char_count, 2);
        assert_eq!(editor.version(), 1);
    }

    #[test]
    fn test_set_text_with_selection_clamps() {
        let mut editor = Editor::empty();
        editor.set_text_with_selection("abc", SelectionRange::new(1, 40));
        assert_eq!(editor.selection(), SelectionRange::new(1, 3));
    }

    #[test]
    fn test_insert_at_cursor_replaces_selection() {
        let mut editor = Editor::new("Hello World");
        editor.set_selection(6, 11);

        let delta = editor.insert_at_cursor("Rust").unwrap();
        assert_eq!(editor.text(), "Hello Rust");
        assert_eq!(editor.selection(), SelectionRange::caret(10));
        assert_eq!(delta.edits[0].deleted_text, "World");
        assert_eq!(delta.char_count_change(), -1);
    }

    #[test]
    fn test_insert_at_cursor_empty_text_on_caret_is_noop() {
        let mut editor = Editor::new("abc");
        assert!(editor.insert_at_cursor("").is_none());
        assert_eq!(editor.version(), 0);
    }

    #[test]
    fn test_insert_shifts_selection_after_point() {
        let mut editor = Editor::new("abcdef");
        editor.set_selection(1, 4);
        editor.insert(2, "XY");
        assert_eq!(editor.text(), "abXYcdef");
        assert_eq!(editor.selection(), SelectionRange::new(1, 6));
    }

    #[test]
    fn test_delete_range_maps_selection() {
        let mut editor = Editor::new("0123456789");
        editor.set_selection(3, 8);
        editor.delete_range(2, 5);
        assert_eq!(editor.text(), "0156789");
        assert_eq!(editor.selection(), SelectionRange::new(2, 5));
    }

    #[test]
    fn test_backspace() {
        let mut editor = Editor::new("abc");
        assert!(editor.backspace().is_none());

        editor.move_caret_to(3);
        editor.backspace();
        assert_eq!(editor.text(), "ab");
        assert_eq!(editor.selection(), SelectionRange::caret(2));

        editor.set_selection(0, 2);
        editor.backspace();
        assert_eq!(editor.text(), "");
        assert_eq!(editor.selection(), SelectionRange::caret(0));
    }

    #[test]
    fn test_indent_caret_line() {
        let mut editor = Editor::new("line1\nline2\n");
        editor.move_caret_to(6);
        editor.indent_selection();
        assert_eq!(editor.text(), "line1\n  line2\n");
        assert_eq!(editor.selection(), SelectionRange::caret(8));
    }

    #[test]
    fn test_outdent_partial_indent_is_left_alone() {
        let mut editor = Editor::new(" a");
        editor.set_selection(0, 2);
        assert!(editor.outdent_selection().is_none());
        assert_eq!(editor.text(), " a");
    }

    #[test]
    fn test_outdent_caret_inside_indent_clamps_to_line_start() {
        let mut editor = Editor::new("x\n    y");
        editor.move_caret_to(3);
        editor.outdent_selection();
        assert_eq!(editor.text(), "x\n  y");
        assert_eq!(editor.selection(), SelectionRange::caret(2));
    }

    #[test]
    fn test_outdent_delta_replays_in_order() {
        let mut editor = Editor::new("  a\n  b\n  c");
        editor.set_selection(0, 11);
        let delta = editor.outdent_selection().unwrap();

        let mut replay = SourceBuffer::from_text("  a\n  b\n  c");
        for edit in &delta.edits {
            replay.remove(edit.start..edit.end());
            replay.insert(edit.start, &edit.inserted_text);
        }
        assert_eq!(replay.text(), editor.text());
        assert_eq!(editor.text(), "a\nb\nc");
    }

    #[test]
    fn test_execute_dispatch() {
        let mut editor = Editor::new("Line 1\nLine 2\nLine 3");

        let result = editor.execute(EditorCommand::ClickAt {
            x: 64.0 + 8.4 * 2.5,
            y: 28.0 * 1.5,
            geometry: ClickGeometry::default(),
        });
        assert_eq!(result, CommandResult::Offset(9));
        assert_eq!(editor.position_of(9), Position::new(1, 2));

        let result = editor.execute(EditorCommand::InsertText {
            text: "X".to_string(),
        });
        assert!(result.text_delta().is_some());
        assert_eq!(editor.line_text(1).as_deref(), Some("LiXne 2"));

        let result = editor.execute(EditorCommand::MoveTo { offset: 1000 });
        assert_eq!(result, CommandResult::Success);
        assert_eq!(editor.selection(), SelectionRange::caret(editor.char_count()));
    }
}
