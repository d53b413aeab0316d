//! Performance benchmarks for payload formatting
//!
//! Measures pretty-printing and truncation for payloads of growing size,
//! and the raw fallback for text that is not JSON.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use wsdebug::format::render_payload;
use wsdebug::message_log::MessageLog;

/// A feed-style payload with `items` entries, each carrying a long string.
fn generate_payload(items: usize) -> String {
    let entries: Vec<String> = (0..items)
        .map(|i| {
            format!(
                r#"{{"id":{},"title":"Item {}","summary":"{}","tags":["a","b","c"],"score":{}.5}}"#,
                i,
                i,
                "lorem ipsum dolor sit amet ".repeat(20),
                i
            )
        })
        .collect();
    format!(r#"{{"command":"fetch","items":[{}]}}"#, entries.join(","))
}

fn bench_render_json(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_json");

    for items in [1, 10, 100, 1000].iter() {
        let payload = generate_payload(*items);
        group.throughput(Throughput::Bytes(payload.len() as u64));

        for threshold in [50usize, 500] {
            group.bench_with_input(
                BenchmarkId::new(format!("truncate_{}", threshold), items),
                &payload,
                |b, payload| {
                    b.iter(|| black_box(render_payload(black_box(payload), threshold)));
                },
            );
        }
    }

    group.finish();
}

fn bench_render_raw(c: &mut Criterion) {
    let raw = "not json at all ".repeat(1000);
    c.bench_function("render_raw_16k", |b| {
        b.iter(|| black_box(render_payload(black_box(&raw), 50)));
    });
}

/// Pushing into a bounded log, where every push past the bound drops one entry.
fn bench_bounded_log(c: &mut Criterion) {
    let text = generate_payload(1);
    c.bench_function("bounded_log_push", |b| {
        let mut log = MessageLog::with_capacity_limit(1000);
        b.iter(|| {
            log.push(black_box(text.clone()), true);
        });
    });
}

criterion_group!(benches, bench_render_json, bench_render_raw, bench_bounded_log);

criterion_main!(benches);
