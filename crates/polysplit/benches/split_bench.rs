//! Criterion benchmarks for the polygon splitter.
//! Focus sizes: n in {5, 16, 64, 256} vertices, one notch each.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use polysplit::scene::single_notch;
use polysplit::{split, GeomCfg};

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");
    let cfg = GeomCfg::default();
    for &n in &[5usize, 16, 64, 256] {
        group.bench_with_input(BenchmarkId::new("single_notch", n), &n, |b, &n| {
            b.iter_batched(
                || single_notch(n, 10.0, n / 2, 0.1, 0.25).unwrap(),
                |poly| {
                    let _res = split(&poly, cfg).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_split);
criterion_main!(benches);
