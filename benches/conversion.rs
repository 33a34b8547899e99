//! Conversion throughput benchmark across input sizes

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use html_markdown_converter::MarkdownConverter;

/// Build sample HTML of exactly `length` characters by repeating a
/// paragraph seed inside a document shell and truncating
fn generate_sample_html(length: usize) -> String {
    let mut html = String::from("<html><body><p>This is sample text for HTML conversion</p>");
    while html.len() < length {
        html.push_str("<p>Another sample paragraph to reach the length.</p>");
    }
    html.push_str("</body></html>");
    html.truncate(length);
    html
}

fn bench_conversion(c: &mut Criterion) {
    let converter = MarkdownConverter::new();

    for size in [100, 500, 1000, 5000, 10000] {
        let html = generate_sample_html(size);
        c.bench_function(&format!("convert_html_{}", size), |b| {
            b.iter(|| converter.convert(black_box(&html)))
        });
    }
}

criterion_group!(benches, bench_conversion);
criterion_main!(benches);
