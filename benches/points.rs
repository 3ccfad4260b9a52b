//! Benchmarks for grid construction, point lookup, and recomputation.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used, clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridcanvas::GridCalculator;

/// Benchmark constructing a calculator with a large point table
fn bench_construction(c: &mut Criterion) {
    c.bench_function("construct_1000x1000", |b| {
        b.iter(|| {
            GridCalculator::new(black_box(1920), black_box(1080), 1000, 1000)
                .expect("grid fits the pixel range")
        })
    });
}

/// Benchmark single point lookups against the precomputed table
fn bench_point_lookup(c: &mut Criterion) {
    let grid = GridCalculator::new(1920, 1080, 1000, 1000).expect("grid fits the pixel range");

    c.bench_function("left_point", |b| {
        b.iter(|| grid.left_point(black_box(500)).expect("index in range"))
    });

    c.bench_function("square", |b| {
        b.iter(|| {
            grid.square(black_box(10), black_box(10), black_box(900), black_box(900))
                .expect("indices in range and ordered")
        })
    });
}

/// Benchmark full recomputation via a grid-size update
fn bench_update_grid(c: &mut Criterion) {
    let mut grid = GridCalculator::new(1920, 1080, 1000, 1000).expect("grid fits the pixel range");

    c.bench_function("update_grid_500x500", |b| {
        b.iter(|| {
            grid.update_grid(black_box(500), black_box(500))
                .expect("grid fits the pixel range")
        })
    });
}

criterion_group!(
    benches,
    bench_construction,
    bench_point_lookup,
    bench_update_grid
);
criterion_main!(benches);
