//! Batch hot path benchmarks.
//!
//! Push into a full batch (every call evicts) and split of a full batch
//! are the two operations a reporting loop runs most.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use metric_batch::{Metric, MetricBatch, LIMIT};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn full_batch() -> MetricBatch {
    MetricBatch::new(
        None,
        Some(0),
        None,
        (0..LIMIT).map(|i| Metric::gauge("bench.gauge", f64::from(i as u32))).collect(),
    )
}

/// TARGET: constant time per push regardless of fill level
fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");

    group.bench_function("push_under_capacity", |b| {
        b.iter_batched(
            MetricBatch::<Metric>::default,
            |mut batch| {
                for i in 0..1_000u32 {
                    batch.push(Metric::count("bench.count", f64::from(i)));
                }
                black_box(batch)
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function("push_with_eviction", |b| {
        let mut batch = full_batch();
        let mut rng = StdRng::seed_from_u64(1);
        b.iter(|| {
            batch.push_with_rng(black_box(Metric::gauge("bench.gauge", 1.0)), &mut rng);
        });
    });

    group.finish();
}

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");

    for max_len in [1_000usize, 250, 50] {
        group.bench_with_input(BenchmarkId::new("split_to_fit", max_len), &max_len, |b, &max_len| {
            b.iter_batched(
                full_batch,
                |batch| black_box(batch.split_to_fit(max_len)),
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_push, bench_split);
criterion_main!(benches);
