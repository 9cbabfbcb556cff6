//! Time the batch crossing detector against the naive reference loop.
//!
//! Usage:
//!   cargo run --release -p planar --example crossing_profile -- [points] [segments]
//!
//! Asserts both paths agree before timing (10 repetitions each).

use std::hint::black_box;
use std::time::Instant;

use planar::sample::{draw_batch, BatchSampleCfg, ReplayToken};
use planar::segments::{multi_segment_cross, multi_segment_cross_par, naive_multi_segment_cross};

fn main() {
    let mut args = std::env::args().skip(1);
    let points = args.next().and_then(|s| s.parse().ok()).unwrap_or(10_000);
    let segments = args.next().and_then(|s| s.parse().ok()).unwrap_or(100);
    let sample = draw_batch(
        BatchSampleCfg {
            points,
            segments,
            scale: 100.0,
        },
        ReplayToken::new(2013),
    );
    let tuples = sample.segment_tuples();

    let reference = naive_multi_segment_cross(&sample.pool, &tuples);
    let fast: Vec<(usize, usize)> = multi_segment_cross(&sample.pool, &sample.segments)
        .expect("sampled indices are in range")
        .into_iter()
        .map(Into::into)
        .collect();
    assert_eq!(reference, fast);
    println!("{} crossings among {} segments", fast.len(), segments);

    let t = Instant::now();
    for _ in 0..10 {
        let _ = black_box(naive_multi_segment_cross(black_box(&sample.pool), black_box(&tuples)));
    }
    println!("time for reference loop: {:?}", t.elapsed());

    let t = Instant::now();
    for _ in 0..10 {
        let _ = black_box(multi_segment_cross(
            black_box(&sample.pool),
            black_box(&sample.segments),
        ));
    }
    println!("time for multi_segment_cross: {:?}", t.elapsed());

    let t = Instant::now();
    for _ in 0..10 {
        let _ = black_box(multi_segment_cross_par(
            black_box(&sample.pool),
            black_box(&sample.segments),
        ));
    }
    println!("time for multi_segment_cross_par: {:?}", t.elapsed());
}
