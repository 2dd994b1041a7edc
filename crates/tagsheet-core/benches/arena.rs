//! Criterion benches for tag placement.
//!
//! Run with: `cargo bench -p tagsheet-core`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

use tagsheet_core::{arena_layout, build_requests, column_layout, ArenaParams, Canvas, ColumnParams};

fn bench_arena(c: &mut Criterion) {
    let requests = build_requests(&["tag36h11:6", "tag16h5:4"]).unwrap();
    let canvas = Canvas::default();
    let mut group = c.benchmark_group("arena_layout");

    for count in [50usize, 150, 300] {
        let params = ArenaParams::new(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &params, |b, params| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(1);
                black_box(arena_layout(&requests, &canvas, params, &mut rng).unwrap())
            })
        });
    }

    group.finish();
}

fn bench_column(c: &mut Criterion) {
    let requests = build_requests(&["tag36h11:6:0-300", "tag16h5:10"]).unwrap();
    let canvas = Canvas::default();
    let params = ColumnParams::new(3);

    c.bench_function("column_layout", |b| {
        b.iter(|| black_box(column_layout(&requests, &canvas, &params).unwrap()))
    });
}

criterion_group!(benches, bench_arena, bench_column);
criterion_main!(benches);
