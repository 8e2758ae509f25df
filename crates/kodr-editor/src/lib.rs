#![warn(missing_docs)]
//! Kodr Editor - headless state for the playground's overlay text editor
//!
//! # Overview
//!
//! The playground draws a line-numbered code view and lays a transparent text area on top of
//! it. `kodr-editor` owns everything that overlay needs besides pixels: the document text, the
//! caret/selection, indentation, pointer-to-offset mapping, and the per-line rows of the code
//! view.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Editor + EditorCommand                     │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Render rows / pointer mapping              │  ← View Data
//! ├─────────────────────────────────────────────┤
//! │  SourceBuffer (Rope-based)                  │  ← Text Storage
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use kodr_editor::{ClickGeometry, Editor, EditorCommand, Position};
//!
//! let mut editor = Editor::new("fn main() {\n}\n");
//!
//! // Click on row 1, past the end of the text.
//! let offset = editor.click_at(500.0, 30.0, &ClickGeometry::default());
//! assert_eq!(editor.position_of(offset), Position::new(1, 1));
//!
//! editor.execute(EditorCommand::InsertText { text: " // end".to_string() });
//! assert_eq!(editor.line_text(1).as_deref(), Some("} // end"));
//! ```
//!
//! # Module Description
//!
//! - [`buffer`] - Rope-backed source buffer
//! - [`commands`] - editor state and command interface
//! - [`layout`] - monospace measurement and click resolution
//! - [`render`] - rows for the line-numbered view
//! - [`delta`] - structured text deltas

pub mod buffer;
pub mod commands;
pub mod delta;
pub mod layout;
pub mod render;
mod selection;

pub use buffer::SourceBuffer;
pub use commands::{CommandResult, Editor, EditorCommand, INDENT_UNIT};
pub use delta::{TextDelta, TextDeltaEdit};
pub use layout::{ClickGeometry, resolve_click_position};
pub use render::{RenderedLine, render_lines};
pub use selection::{Position, SelectionRange};
