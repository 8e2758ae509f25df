use kodr_editor::{Editor, EditorCommand, SelectionRange};

#[test]
fn test_indent_two_lines_twice() {
    let mut editor = Editor::new("a\nb");
    editor.set_selection(0, 3);

    editor.execute(EditorCommand::Indent);
    assert_eq!(editor.text(), "  a\n  b");
    assert_eq!(editor.selection(), SelectionRange::new(2, 7));

    editor.execute(EditorCommand::Indent);
    assert_eq!(editor.text(), "    a\n    b");
    assert_eq!(editor.selection(), SelectionRange::new(4, 11));
}

#[test]
fn test_indent_n_times_adds_n_units_per_line() {
    let mut editor = Editor::new("x\ny\nz");
    editor.set_selection(0, 3);

    for _ in 0..5 {
        editor.indent_selection();
    }

    assert_eq!(editor.text(), "          x\n          y\nz");
}

#[test]
fn test_indent_keeps_same_characters_selected() {
    let mut editor = Editor::new("let a = 1;\nlet b = 2;\nlet c = 3;");
    // "a = 1;\nlet b"
    editor.set_selection(4, 16);
    let selected_before = editor.buffer().slice(4..16);

    editor.indent_selection();

    let selection = editor.selection();
    assert_eq!(
        editor.buffer().slice(selection.start()..selection.end()),
        selected_before.replace("\nlet", "\n  let")
    );
    assert_eq!(editor.text(), "  let a = 1;\n  let b = 2;\nlet c = 3;");
}

#[test]
fn test_outdent_skips_lines_without_unit() {
    let mut editor = Editor::new("  a\nb");
    editor.set_selection(0, 5);

    editor.execute(EditorCommand::Outdent);

    assert_eq!(editor.text(), "a\nb");
    assert_eq!(editor.selection(), SelectionRange::new(0, 3));
}

#[test]
fn test_outdent_removes_only_one_unit() {
    let mut editor = Editor::new("      deep\n    mid");
    editor.set_selection(0, editor.char_count());

    editor.outdent_selection();

    assert_eq!(editor.text(), "    deep\n  mid");
    assert_eq!(editor.selection(), SelectionRange::new(0, 14));
}

#[test]
fn test_outdent_undoes_indent() {
    let original = "function f() {\n  return 1;\n}";
    let mut editor = Editor::new(original);
    editor.set_selection(3, 20);

    editor.indent_selection();
    let indented_selection = editor.selection();
    assert_ne!(editor.text(), original);

    editor.outdent_selection();
    assert_eq!(editor.text(), original);
    assert_eq!(editor.selection(), SelectionRange::new(3, 20));
    assert_eq!(indented_selection, SelectionRange::new(5, 24));
}

#[test]
fn test_outdent_with_nothing_to_remove_keeps_state() {
    let mut editor = Editor::new("a\nb");
    editor.set_selection(1, 2);
    let version = editor.version();

    let result = editor.execute(EditorCommand::Outdent);

    assert!(result.text_delta().is_none());
    assert_eq!(editor.version(), version);
    assert_eq!(editor.selection(), SelectionRange::new(1, 2));
}

#[test]
fn test_caret_at_line_start_moves_with_indent() {
    let mut editor = Editor::new("a\nb");
    editor.move_caret_to(2);

    editor.indent_selection();
    assert_eq!(editor.text(), "a\n  b");
    assert_eq!(editor.selection(), SelectionRange::caret(4));

    editor.outdent_selection();
    assert_eq!(editor.text(), "a\nb");
    assert_eq!(editor.selection(), SelectionRange::caret(2));
}

#[test]
fn test_selection_ending_at_column_zero_includes_that_line() {
    let mut editor = Editor::new("a\nb");
    // "a\n": the end sits at the start of line 1.
    editor.set_selection(0, 2);

    editor.execute(EditorCommand::Indent);
    assert_eq!(editor.text(), "  a\n  b");
    assert_eq!(editor.selection(), SelectionRange::new(2, 6));

    // "  a\n" again ends at the start of line 1.
    editor.set_selection(0, 4);
    editor.execute(EditorCommand::Outdent);
    assert_eq!(editor.text(), "a\nb");
}
