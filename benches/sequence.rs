//! Benchmarks for lookback/forecast windowing.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lookback::core::{Dataset, SeriesOptions};
use ndarray::Array2;

fn bench_create_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_series");

    for size in [256, 1024, 4096].iter() {
        let series = Dataset::from((0..*size).map(|i| i as f64).collect::<Vec<_>>());
        let table = Dataset::from(Array2::from_shape_fn((*size, 8), |(i, j)| (i * 8 + j) as f64));

        group.bench_with_input(BenchmarkId::new("univariate", size), size, |b, _| {
            b.iter(|| {
                series
                    .create_series(black_box(32), black_box(8), &SeriesOptions::univariate())
                    .unwrap()
            })
        });

        group.bench_with_input(BenchmarkId::new("multivariate", size), size, |b, _| {
            b.iter(|| {
                table
                    .create_series(black_box(32), black_box(8), &SeriesOptions::multivariate())
                    .unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_create_series);
criterion_main!(benches);
