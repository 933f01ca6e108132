//! summation strategy benchmarks
//!
//! Usage:
//!   cargo bench -p sum-to-n

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sum_to_n::Strategy;

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum_to_n");

    for n in [1_000u64, 100_000, 10_000_000] {
        for strategy in Strategy::ALL {
            group.bench_with_input(BenchmarkId::new(strategy.name(), n), &n, |b, &n| {
                b.iter(|| black_box(strategy.sum(black_box(n))));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
