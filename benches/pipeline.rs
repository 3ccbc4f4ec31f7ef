//! Benchmarks for the per-request hot path.
//!
//! Measures the pure pipeline stages that run on every cache miss:
//! fingerprint derivation, feature extraction, and rating derivation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sentigrade::analysis::{extract, rating};
use sentigrade::cache::fingerprint;

const SHORT_REVIEW: &str = "This movie was absolutely amazing!";

fn long_review() -> String {
    "A thoughtful, sprawling epic that rewards patience. ".repeat(20)
}

fn bench_fingerprint(c: &mut Criterion) {
    let long = long_review();
    let mut group = c.benchmark_group("fingerprint");
    for (name, text) in [("short", SHORT_REVIEW), ("long", long.as_str())] {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), text, |b, text| {
            b.iter(|| fingerprint(black_box(text)));
        });
    }
    group.finish();
}

fn bench_features_and_rating(c: &mut Criterion) {
    let long = long_review();
    c.bench_function("extract_features", |b| {
        b.iter(|| extract(black_box(&long)));
    });

    let features = extract(&long);
    c.bench_function("rate", |b| {
        b.iter(|| rating::rate(black_box(0.87), black_box(&features)));
    });
}

criterion_group!(benches, bench_fingerprint, bench_features_and_rating);
criterion_main!(benches);
