//! Criterion benchmarks comparing the sequential and concurrent batch
//! sorters.
//!
//! Measures both strategies over the same batches so the crossover point
//! (where thread-per-array fan-out starts paying for itself) is visible in
//! one report.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use sortbench_server::sorter::{sort_concurrent, sort_sequential};

const BATCH_WIDTH: usize = 8;

/// Generate a batch of shuffled integer arrays, seeded so every run and
/// both strategies see identical input.
fn gen_batch(count: usize, len: usize) -> Vec<Vec<i64>> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| {
            let mut array: Vec<i64> = (0..len as i64).rev().collect();
            array.shuffle(&mut rng);
            array
        })
        .collect()
}

fn bench_sequential(c: &mut Criterion) {
    let lens = [100, 1_000, 10_000];
    let mut group = c.benchmark_group("sort_sequential");

    for len in lens {
        let batch = gen_batch(BATCH_WIDTH, len);

        group.throughput(Throughput::Elements((BATCH_WIDTH * len) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &batch, |b, batch| {
            b.iter(|| sort_sequential(black_box(batch)));
        });
    }

    group.finish();
}

fn bench_concurrent(c: &mut Criterion) {
    let lens = [100, 1_000, 10_000];
    let mut group = c.benchmark_group("sort_concurrent");

    for len in lens {
        let batch = gen_batch(BATCH_WIDTH, len);

        group.throughput(Throughput::Elements((BATCH_WIDTH * len) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &batch, |b, batch| {
            b.iter(|| sort_concurrent(black_box(batch)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sequential, bench_concurrent);
criterion_main!(benches);
