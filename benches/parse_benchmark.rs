//! Benchmarks for rich-text-types decoding performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks decode synthetic documents of various sizes in both
//! accepted root shapes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rich_text_types::RichTextContent;

/// Creates a synthetic document body with the given number of blocks.
fn create_test_elements(block_count: usize) -> String {
    let mut blocks = Vec::with_capacity(block_count);

    for i in 0..block_count {
        let block = match i % 4 {
            0 => format!(
                r#"{{"type":"heading-two","children":[{{"text":"Section {}"}}]}}"#,
                i
            ),
            1 => format!(
                r#"{{"type":"paragraph","children":[{{"text":"Paragraph {} with "}},{{"text":"bold","bold":true}},{{"type":"link","href":"https://example.com/{}","children":[{{"text":"a link"}}]}}]}}"#,
                i, i
            ),
            2 => format!(
                r#"{{"type":"bulleted-list","children":[{{"type":"list-item","children":[{{"type":"list-item-child","children":[{{"text":"Item {}","italic":true}}]}}]}}]}}"#,
                i
            ),
            _ => format!(
                r#"{{"type":"embed","nodeId":"node-{}","nodeType":"Post","title":"Post {}","children":[{{"text":""}}]}}"#,
                i, i
            ),
        };
        blocks.push(block);
    }

    format!("[{}]", blocks.join(","))
}

/// Benchmark decoding of the bare-array shape.
fn bench_bare_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("bare_decoding");

    for block_count in [10, 100, 500, 1000].iter() {
        let data = create_test_elements(*block_count);

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("blocks", block_count),
            &data,
            |b, data| {
                b.iter(|| {
                    let _ = RichTextContent::from_json_str(black_box(data));
                });
            },
        );
    }

    group.finish();
}

/// Benchmark decoding of the wrapped shape.
fn bench_wrapped_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrapped_decoding");

    for block_count in [10, 100, 500].iter() {
        let data = format!(r#"{{"children":{}}}"#, create_test_elements(*block_count));

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("blocks", block_count),
            &data,
            |b, data| {
                b.iter(|| {
                    let _ = RichTextContent::from_json_str(black_box(data));
                });
            },
        );
    }

    group.finish();
}

/// Benchmark text extraction.
fn bench_text_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_extraction");

    for block_count in [10, 100, 500, 1000].iter() {
        let data = create_test_elements(*block_count);
        let content = RichTextContent::from_json_str(&data).unwrap();

        group.bench_with_input(
            BenchmarkId::new("blocks", block_count),
            &content,
            |b, content| {
                b.iter(|| {
                    let _ = black_box(content).plain_text();
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_bare_decoding,
    bench_wrapped_decoding,
    bench_text_extraction,
);
criterion_main!(benches);
