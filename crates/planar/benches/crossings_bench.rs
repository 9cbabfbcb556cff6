//! Criterion benchmarks for the all-pairs segment crossing batch.
//! Focus sizes: segments in {10, 100, 500} over a 10k-point pool.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use planar::sample::{draw_batch, BatchSampleCfg, ReplayToken};
use planar::segments::{multi_segment_cross_with, naive_multi_segment_cross};
use planar::BatchCfg;

fn bench_crossings(c: &mut Criterion) {
    let mut group = c.benchmark_group("multi_segment_cross");
    for &m in &[10usize, 100, 500] {
        let sample = draw_batch(
            BatchSampleCfg {
                points: 10_000,
                segments: m,
                scale: 100.0,
            },
            ReplayToken::new(43),
        );
        let tuples = sample.segment_tuples();

        group.bench_with_input(BenchmarkId::new("naive", m), &m, |b, _| {
            b.iter(|| naive_multi_segment_cross(&sample.pool, &tuples))
        });
        for (name, cfg) in [
            ("serial", BatchCfg::default()),
            ("parallel", BatchCfg::parallel()),
        ] {
            group.bench_with_input(BenchmarkId::new(name, m), &m, |b, _| {
                b.iter(|| multi_segment_cross_with(&sample.pool, &sample.segments, cfg).unwrap())
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_crossings);
criterion_main!(benches);
