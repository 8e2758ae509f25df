use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kodr_editor::{ClickGeometry, Editor};

fn large_text(line_count: usize) -> String {
    let mut out = String::with_capacity(line_count * 48);
    for i in 0..line_count {
        out.push_str(&format!("    const value{i:05} = compute({i}); // benchmark\n"));
    }
    out.pop();
    out
}

fn bench_indent_whole_document(c: &mut Criterion) {
    let text = large_text(5_000);
    c.bench_function("indent/5k_lines", |b| {
        b.iter_batched(
            || {
                let mut editor = Editor::new(&text);
                editor.set_selection(0, editor.char_count());
                editor
            },
            |mut editor| {
                black_box(editor.indent_selection());
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_outdent_whole_document(c: &mut Criterion) {
    let text = large_text(5_000);
    c.bench_function("outdent/5k_lines", |b| {
        b.iter_batched(
            || {
                let mut editor = Editor::new(&text);
                editor.set_selection(0, editor.char_count());
                editor
            },
            |mut editor| {
                black_box(editor.outdent_selection());
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_click_resolution(c: &mut Criterion) {
    let editor = Editor::new(&large_text(5_000));
    let geometry = ClickGeometry::default();
    c.bench_function("click/5k_lines", |b| {
        b.iter(|| {
            black_box(editor.resolve_click_position(
                black_box(300.0),
                black_box(28.0 * 2_500.5),
                &geometry,
            ))
        })
    });
}

criterion_group!(
    benches,
    bench_indent_whole_document,
    bench_outdent_whole_document,
    bench_click_resolution
);
criterion_main!(benches);
