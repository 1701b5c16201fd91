//! Multi-threaded i-k-j multiply on explicitly spawned threads.

use crate::matrix::naive_ikj::{debug_check_dims, ikj_row, matmul_ikj};
use std::panic;
use std::thread;

/// Multi-threaded C = A * B using scoped threads.
///
/// Hands each thread a contiguous block of rows of C. How many threads
/// depends on the 2n³ flops of an n×n product: below 100M it stays on the
/// calling thread, below 300M it uses two, and beyond that it goes up to
/// `num_threads`, with at most one thread per 64 rows.
///
/// # Arguments
///
/// * `num_threads` - Upper bound on threads; `0` means one
pub fn matmul_threaded(a: &[f64], b: &[f64], c: &mut [f64], n: usize, num_threads: usize) {
    let effective_threads = choose_thread_count(n, num_threads);

    if effective_threads == 1 {
        matmul_ikj(a, b, c, n);
        return;
    }

    matmul_row_blocks(a, b, c, n, effective_threads);
}

/// Splits C into `num_threads` contiguous row blocks and computes each
/// block on its own scoped thread.
///
/// Blocks hold `ceil(n / num_threads)` rows, the last one possibly fewer;
/// when n is small some threads get nothing and are not spawned. A and B
/// are borrowed by every thread, C is handed out as disjoint `&mut` blocks,
/// and all threads are joined before returning.
///
/// `num_threads == 0` is treated as one thread.
pub fn matmul_row_blocks(a: &[f64], b: &[f64], c: &mut [f64], n: usize, num_threads: usize) {
    debug_check_dims(a, b, c, n);

    if n == 0 {
        return;
    }

    let rows_per_thread = n.div_ceil(num_threads.max(1));

    thread::scope(|s| {
        let handles: Vec<_> = c[..n * n]
            .chunks_mut(rows_per_thread * n)
            .enumerate()
            .map(|(tid, c_block)| {
                let start_row = tid * rows_per_thread;

                s.spawn(move || {
                    for (offset, c_row) in c_block.chunks_exact_mut(n).enumerate() {
                        ikj_row(a, b, c_row, start_row + offset, n);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap_or_else(|e| panic::resume_unwind(e));
        }
    });
}

const MIN_ROWS_PER_BLOCK: usize = 64;
const SERIAL_WORK_LIMIT: f64 = 100_000_000.0;
const PAIR_WORK_LIMIT: f64 = 300_000_000.0;

/// Thread count for an n×n product, between 1 and `max_threads`.
fn choose_thread_count(n: usize, max_threads: usize) -> usize {
    let work = 2.0 * (n as f64).powi(3);

    let by_work = if work < SERIAL_WORK_LIMIT {
        1
    } else if work < PAIR_WORK_LIMIT {
        2
    } else {
        max_threads
    };

    let by_rows = (n / MIN_ROWS_PER_BLOCK).max(1);

    by_work.min(by_rows).min(max_threads).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(n: usize) -> (Vec<f64>, Vec<f64>) {
        let a: Vec<f64> = (0..n * n).map(|i| ((i % 17) as f64) * 0.37 - 2.0).collect();
        let b: Vec<f64> = (0..n * n).map(|i| ((i % 13) as f64) * 1.11 - 5.0).collect();
        (a, b)
    }

    #[test]
    fn test_row_blocks_bit_identical() {
        for n in [1, 2, 3, 7, 16, 33] {
            let (a, b) = inputs(n);

            let mut c_ref = vec![0.0; n * n];
            matmul_ikj(&a, &b, &mut c_ref, n);

            for threads in [1, 2, 3, 4, 5, 8, 64] {
                let mut c_mt = vec![f64::NAN; n * n];
                matmul_row_blocks(&a, &b, &mut c_mt, n, threads);

                assert_eq!(c_ref, c_mt, "n={}, threads={}", n, threads);
            }
        }
    }

    #[test]
    fn test_row_blocks_zero_threads() {
        let (a, b) = inputs(5);
        let mut c_ref = vec![0.0; 25];
        let mut c_mt = vec![0.0; 25];

        matmul_ikj(&a, &b, &mut c_ref, 5);
        matmul_row_blocks(&a, &b, &mut c_mt, 5, 0);

        assert_eq!(c_ref, c_mt);
    }

    #[test]
    fn test_threaded_matches_sequential() {
        // 2 * 400³ = 128M flops: two row blocks
        let n = 400;
        let (a, b) = inputs(n);

        let mut c_ref = vec![0.0; n * n];
        let mut c_mt = vec![0.0; n * n];

        matmul_ikj(&a, &b, &mut c_ref, n);
        matmul_threaded(&a, &b, &mut c_mt, n, 4);

        assert_eq!(c_ref, c_mt);
    }

    #[test]
    fn test_threaded_full_count_matches_sequential() {
        // 2 * 540³ ≈ 315M flops, 8 row blocks available: all 4 threads
        let n = 540;
        assert_eq!(choose_thread_count(n, 4), 4);

        let (a, b) = inputs(n);

        let mut c_ref = vec![0.0; n * n];
        let mut c_mt = vec![f64::NAN; n * n];

        matmul_ikj(&a, &b, &mut c_ref, n);
        matmul_threaded(&a, &b, &mut c_mt, n, 4);

        assert_eq!(c_ref, c_mt);
    }

    #[test]
    fn test_thread_count_by_size() {
        // n=256 is 33M flops: stays serial
        assert_eq!(choose_thread_count(256, 4), 1);

        // n=450 is 182M: two blocks of 225 rows
        assert_eq!(choose_thread_count(450, 4), 2);

        // n=1024 is 2.1B: the caller's limit applies
        assert_eq!(choose_thread_count(1024, 4), 4);

        // n=600 has room for 9 threads at 64 rows each
        assert_eq!(choose_thread_count(600, 16), 9);

        // A limit of 0 still yields one thread
        assert_eq!(choose_thread_count(1024, 0), 1);
    }
}
