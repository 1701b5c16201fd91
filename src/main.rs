//! Benchmark runner: sequential vs. parallel series sum and matrix multiply.
//!
//! Problem sizes default to the constants below. Set `LEN` to time a
//! single series length and `MLEN` to time a single matrix size.

use rand::Rng;
use speedup::matrix::verify::{matrices_match, max_abs_diff};
use speedup::pool::{build_pool, worker_count};
use speedup::{
    matmul_ikj, matmul_naive_ijk, matmul_parallel, matmul_threaded, sum_parallel, sum_serial,
    sum_threaded,
};
use std::env;
use std::error::Error;
use std::str::FromStr;
use std::time::Instant;

const SERIES_LENS: [i64; 4] = [1_000, 100_000, 1_000_000, 10_000_000];
const MATRIX_SIZES: [usize; 4] = [64, 128, 256, 512];
const POOL_SIZES: [usize; 3] = [1, 4, 16];

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Parallel Speedup Benchmark ===\n");
    println!("Global rayon pool: {} workers\n", worker_count());

    let series_lens = env_override::<i64>("LEN").map_or(SERIES_LENS.to_vec(), |len| vec![len]);
    let matrix_sizes = env_override::<usize>("MLEN").map_or(MATRIX_SIZES.to_vec(), |n| vec![n]);

    run_series(&series_lens)?;
    run_matmul(&matrix_sizes);

    Ok(())
}

fn run_series(lens: &[i64]) -> Result<(), Box<dyn Error>> {
    let iterations = 5;

    for &len in lens {
        println!("Series: sum ln(i)/i, n = {}", len);
        println!("{}", "-".repeat(60));

        let reference = sum_serial(len);

        let mut results: Vec<(String, f64, f64)> = vec![
            timed("Serial".into(), iterations, || sum_serial(len)),
            timed("Rayon (global)".into(), iterations, || sum_parallel(len)),
        ];

        for threads in POOL_SIZES {
            let pool = build_pool(threads)?;
            results.push(timed(format!("Rayon pool ({})", threads), iterations, || {
                pool.install(|| sum_parallel(len))
            }));
        }

        for threads in POOL_SIZES {
            results.push(timed(format!("Threads ({})", threads), iterations, || {
                sum_threaded(len, threads)
            }));
        }

        let baseline_time = results[0].1;
        for (i, (name, time_ms, value)) in results.iter().enumerate() {
            let rel_err = (value - reference).abs() / reference.abs().max(1.0);
            println!(
                "{}. {:18} {:10.3} ms  ({:5.1}×)  rel err {:.1e}",
                i + 1,
                name,
                time_ms,
                baseline_time / time_ms,
                rel_err
            );
        }
        println!();
    }

    Ok(())
}

fn run_matmul(sizes: &[usize]) {
    let iterations = 3;
    let max_threads = worker_count();

    for &n in sizes {
        println!("Matrix: {}×{}", n, n);
        println!("{}", "-".repeat(60));

        let a = random_matrix(n);
        let b = random_matrix(n);

        let mut reference = vec![0.0; n * n];
        matmul_ikj(&a, &b, &mut reference, n);

        let results = vec![
            bench_fn("Naive (i-j-k)", &a, &b, n, iterations, &reference, matmul_naive_ijk),
            bench_fn("Scalar (i-k-j)", &a, &b, n, iterations, &reference, matmul_ikj),
            bench_fn("Rayon rows", &a, &b, n, iterations, &reference, matmul_parallel),
            bench_fn("Scoped threads", &a, &b, n, iterations, &reference, |a, b, c, n| {
                matmul_threaded(a, b, c, n, max_threads)
            }),
        ];

        let baseline_time = results[0].time_ms;
        for (i, r) in results.iter().enumerate() {
            println!(
                "{}. {:16} {:8.2} ms  {:6.2} GFLOPS  ({:.1}×)  {}",
                i + 1,
                r.name,
                r.time_ms,
                r.gflops,
                baseline_time / r.time_ms,
                if r.verified { "ok" } else { "MISMATCH" }
            );
        }
        println!();
    }
}

struct MatmulResult {
    name: &'static str,
    time_ms: f64,
    gflops: f64,
    verified: bool,
}

/// Benchmark a matmul function and check its output against `reference`.
fn bench_fn<F>(
    name: &'static str,
    a: &[f64],
    b: &[f64],
    n: usize,
    iterations: usize,
    reference: &[f64],
    f: F,
) -> MatmulResult
where
    F: Fn(&[f64], &[f64], &mut [f64], usize),
{
    // Warmup
    let mut c = vec![0.0; n * n];
    f(a, b, &mut c, n);

    let verified = matrices_match(reference, &c, 1e-9);
    if !verified {
        println!(
            "   {}: max abs diff {:.3e} vs. i-k-j reference",
            name,
            max_abs_diff(reference, &c)
        );
    }

    // Timed runs
    let mut total = 0.0;
    for _ in 0..iterations {
        let start = Instant::now();
        f(a, b, &mut c, n);
        total += start.elapsed().as_secs_f64();
    }

    let avg = total / iterations as f64;
    let gflops = 2.0 * (n * n * n) as f64 / avg / 1e9;

    MatmulResult {
        name,
        time_ms: avg * 1000.0,
        gflops,
        verified,
    }
}

/// Time a series sum, returning (name, average ms, value).
fn timed<F>(name: String, iterations: usize, f: F) -> (String, f64, f64)
where
    F: Fn() -> f64,
{
    let mut value = f();

    let mut total = 0.0;
    for _ in 0..iterations {
        let start = Instant::now();
        value = std::hint::black_box(f());
        total += start.elapsed().as_secs_f64();
    }

    (name, total / iterations as f64 * 1000.0, value)
}

fn random_matrix(n: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    (0..n * n).map(|_| rng.gen_range(0.0..1.0)).collect()
}

fn env_override<T: FromStr>(key: &str) -> Option<T> {
    parse_override(env::var(key).ok())
}

/// Unset, empty or out-of-range values fall back to the defaults.
fn parse_override<T: FromStr>(raw: Option<String>) -> Option<T> {
    raw?.trim().parse().ok()
}
