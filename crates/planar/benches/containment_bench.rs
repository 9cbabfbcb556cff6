//! Criterion benchmarks for batch point-in-polygon.
//! Focus sizes: polygon vertices in {4, 64, 512}, 10k query points.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use planar::containment::{points_in_poly, points_in_poly_par};
use planar::sample::{draw_points_in, draw_star_polygon, ReplayToken};
use planar::BBox;

fn bench_containment(c: &mut Criterion) {
    let mut group = c.benchmark_group("points_in_poly");
    for &n in &[4usize, 64, 512] {
        let poly = draw_star_polygon(n, 1.0, ReplayToken::new(44));
        let pts = draw_points_in(&BBox::from_points(&poly), 10_000, ReplayToken::new(45));
        group.bench_with_input(BenchmarkId::new("serial", n), &n, |b, _| {
            b.iter(|| points_in_poly(&poly, &pts).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("parallel", n), &n, |b, _| {
            b.iter(|| points_in_poly_par(&poly, &pts).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_containment);
criterion_main!(benches);
