use criterion::{Criterion, criterion_group, criterion_main};
use markweave_engine::parse;

fn generate_markdown_content(sections: usize) -> String {
    let mut content = String::new();
    for i in 0..sections {
        content.push_str(&format!("## Section {i}\n\n"));
        content.push_str(&format!(
            "Paragraph {i} with **bold**, *italic*, `code`, and a [link](https://example.com/{i}).\n\n"
        ));
        content.push_str("- first item\n- second item\n    - nested item\n\n");
        content.push_str("> a quote with ~~strike~~ text\n\n");
        content.push_str("| A | B |\n|---|---|\n| 1 | 2 |\n\n");
        content.push_str("```rust\nlet answer = 42;\n```\n\n");
    }
    content
}

fn bench_parse_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = generate_markdown_content(100);
    group.bench_function("parse_document", |b| {
        b.iter(|| {
            let doc = parse(std::hint::black_box(&content)).unwrap();
            std::hint::black_box(doc);
        });
    });

    let paragraph = "text with **bold _nested_ markers**, `code`, and [links](u) ".repeat(20);
    group.bench_function("annotate_heavy_line", |b| {
        b.iter(|| {
            let doc = parse(std::hint::black_box(&paragraph)).unwrap();
            std::hint::black_box(doc);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parse_document);
criterion_main!(benches);
