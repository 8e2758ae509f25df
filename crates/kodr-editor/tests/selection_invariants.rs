//! Randomized edit sequences must never break `0 <= start <= end <= len`.

use kodr_editor::{ClickGeometry, Editor, EditorCommand};
use kodr_lang::Language;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_command(rng: &mut StdRng, len: usize) -> EditorCommand {
    let span = len + 8;
    match rng.gen_range(0..9) {
        0 => EditorCommand::InsertText {
            text: ["x", "\n", "  ", "你好", ""][rng.gen_range(0..5)].to_string(),
        },
        1 => EditorCommand::Insert {
            offset: rng.gen_range(0..span),
            text: "y\n".to_string(),
        },
        2 => EditorCommand::Delete {
            start: rng.gen_range(0..span),
            end: rng.gen_range(0..span),
        },
        3 => EditorCommand::Backspace,
        4 => EditorCommand::Indent,
        5 => EditorCommand::Outdent,
        6 => EditorCommand::SetSelection {
            start: rng.gen_range(0..span),
            end: rng.gen_range(0..span),
        },
        7 => EditorCommand::MoveTo {
            offset: rng.gen_range(0..span),
        },
        _ => EditorCommand::ClickAt {
            x: rng.gen_range(-50.0..900.0),
            y: rng.gen_range(-50.0..900.0),
            geometry: ClickGeometry::default(),
        },
    }
}

#[test]
fn test_random_commands_keep_selection_in_bounds() {
    let mut rng = StdRng::seed_from_u64(0x5eed_c0de);

    for lang in Language::ALL {
        let mut editor = Editor::new(lang.sample());

        for _ in 0..400 {
            let before = editor.char_count();
            let command = random_command(&mut rng, before);
            let result = editor.execute(command);

            let selection = editor.selection();
            assert!(selection.start() <= selection.end());
            assert!(selection.end() <= editor.char_count());

            if let Some(delta) = result.text_delta() {
                assert_eq!(delta.before_char_count, before);
                assert_eq!(delta.after_char_count, editor.char_count());
            }
        }
    }
}

#[test]
fn test_insert_at_cursor_length_contract() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut editor = Editor::new(Language::Python.sample());

    for _ in 0..200 {
        let len = editor.char_count();
        let a = rng.gen_range(0..=len);
        let b = rng.gen_range(0..=len);
        editor.set_selection(a, b);
        let selected = editor.selection().len();

        let text = "ab\ncd";
        editor.insert_at_cursor(text);

        assert_eq!(editor.char_count(), len + 5 - selected);
        assert_eq!(editor.selection().start(), a.min(b) + 5);
    }
}
