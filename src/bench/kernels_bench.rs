//! Criterion benchmarks for the series sum and matrix multiply kernels.
//!
//! ```bash
//! cargo bench --bench kernels_bench -- series/
//! cargo bench --bench kernels_bench -- matmul/256
//! ```

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use speedup::pool::build_pool;
use speedup::{
    matmul_ikj, matmul_naive_ijk, matmul_parallel, matmul_threaded, sum_parallel, sum_serial,
    sum_threaded,
};

fn bench_series(c: &mut Criterion) {
    let lens: [i64; 4] = [100, 10_000, 100_000, 1_000_000];
    let mut group = c.benchmark_group("series");

    for len in lens {
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("serial", len), &len, |bench, &len| {
            bench.iter(|| sum_serial(black_box(len)))
        });
        group.bench_with_input(BenchmarkId::new("rayon", len), &len, |bench, &len| {
            bench.iter(|| sum_parallel(black_box(len)))
        });

        for threads in [1usize, 4, 16] {
            let pool = build_pool(threads).expect("failed to build rayon pool");
            group.bench_with_input(
                BenchmarkId::new(format!("rayon_pool{}", threads), len),
                &len,
                |bench, &len| bench.iter(|| pool.install(|| sum_parallel(black_box(len)))),
            );
            group.bench_with_input(
                BenchmarkId::new(format!("thread{}", threads), len),
                &len,
                |bench, &len| bench.iter(|| sum_threaded(black_box(len), threads)),
            );
        }
    }

    group.finish();
}

fn bench_matmul(c: &mut Criterion) {
    let sizes = [64usize, 128, 256];
    let mut group = c.benchmark_group("matmul");
    group.sample_size(10);

    for n in sizes {
        let a: Vec<f64> = (0..n * n).map(|i| (i % 100) as f64).collect();
        let b: Vec<f64> = (0..n * n).map(|i| (i % 100) as f64).collect();
        let mut out = vec![0.0; n * n];

        group.throughput(Throughput::Elements((2 * n * n * n) as u64));

        group.bench_function(BenchmarkId::new("naive_ijk", n), |bench| {
            bench.iter(|| matmul_naive_ijk(black_box(&a), black_box(&b), &mut out, n))
        });
        group.bench_function(BenchmarkId::new("ikj", n), |bench| {
            bench.iter(|| matmul_ikj(black_box(&a), black_box(&b), &mut out, n))
        });
        group.bench_function(BenchmarkId::new("rayon_rows", n), |bench| {
            bench.iter(|| matmul_parallel(black_box(&a), black_box(&b), &mut out, n))
        });
        group.bench_function(BenchmarkId::new("scoped_threads", n), |bench| {
            bench.iter(|| matmul_threaded(black_box(&a), black_box(&b), &mut out, n, 4))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_series, bench_matmul);
criterion_main!(benches);
