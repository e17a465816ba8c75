//! Benchmarks for the square kernel
//!
//! Compares the bare f32 kernel with the full narrow/square/widen path the
//! binding runs per call.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use square_core::{check_arity, square, square_boxed};

fn benchmark_square(c: &mut Criterion) {
    let _ = square_tracing::init_global_tracing(&square_tracing::TracingConfig::from_env());

    let mut group = c.benchmark_group("square");
    group.throughput(Throughput::Elements(1));

    for value in [2.0f32, -5.0, f32::MAX].iter() {
        group.bench_with_input(BenchmarkId::new("kernel", value), value, |bencher, &value| {
            bencher.iter(|| square(black_box(value)));
        });

        let boxed = f64::from(*value);
        group.bench_with_input(BenchmarkId::new("boxed", value), &boxed, |bencher, &boxed| {
            bencher.iter(|| {
                check_arity(black_box(1)).unwrap();
                square_boxed(black_box(boxed))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_square);
criterion_main!(benches);
