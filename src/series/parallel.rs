//! Fork-join versions of the series sum.

use super::{term, upper_bound};
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::panic;
use std::thread;

/// Parallel sum of `ln(i)/i` for `i = 1..=n` on the current rayon pool.
///
/// Rayon splits the index range across its workers, each worker folds its
/// piece into a local partial, and the partials are added together once
/// the workers join. Outside of [`rayon::ThreadPool::install`] this runs on
/// the lazily created global pool.
///
/// The combine order depends on how the range got split, so the result
/// can differ from [`sum_serial`](super::sum_serial) in the last few bits.
/// It stays within `1e-9` relative.
pub fn sum_parallel(n: i64) -> f64 {
    (1..=upper_bound(n)).into_par_iter().map(term).sum()
}

/// Parallel sum using up to `num_threads` scoped threads.
///
/// `[1, n]` is cut into contiguous chunks of `ceil(n / num_threads)`
/// indices. Each thread sums its chunk into a private local, and the
/// partials are added in chunk order after every thread has joined.
/// No more than `n` threads are ever spawned, however many are requested.
///
/// `num_threads == 0` is treated as one thread. With one thread the result
/// is bit-identical to [`sum_serial`](super::sum_serial).
pub fn sum_threaded(n: i64, num_threads: usize) -> f64 {
    let chunks = chunk_bounds(n, num_threads);

    if chunks.len() == 1 {
        return sum_range(chunks[0].clone());
    }

    thread::scope(|s| {
        let handles: Vec<_> = chunks
            .into_iter()
            .map(|range| s.spawn(move || sum_range(range)))
            .collect();

        let mut sum = 0.0;
        for handle in handles {
            sum += handle.join().unwrap_or_else(|e| panic::resume_unwind(e));
        }
        sum
    })
}

/// Splits `[1, n]` into at most `num_threads` contiguous, non-empty ranges.
///
/// The ranges are disjoint, appear in increasing order, and together cover
/// every index exactly once. Returns no ranges for `n <= 0`.
pub fn chunk_bounds(n: i64, num_threads: usize) -> Vec<RangeInclusive<u64>> {
    let n = upper_bound(n);

    if n == 0 {
        return Vec::new();
    }

    // More threads than indices would only add empty chunks
    let num_threads = (num_threads.max(1) as u64).min(n);
    let chunk_size = n.div_ceil(num_threads);

    (1..=n)
        .step_by(chunk_size as usize)
        .map(|start| start..=(start + chunk_size - 1).min(n))
        .collect()
}

fn sum_range(range: RangeInclusive<u64>) -> f64 {
    let mut local_sum = 0.0;
    for i in range {
        local_sum += term(i);
    }
    local_sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::sum_serial;
    use approx::assert_relative_eq;

    #[test]
    fn test_chunk_bounds_cover_range() {
        for n in [1i64, 2, 7, 10, 100, 1001] {
            for threads in [1usize, 2, 3, 4, 16, 64] {
                let chunks = chunk_bounds(n, threads);
                assert!(chunks.len() <= threads);

                let mut next = 1u64;
                for range in &chunks {
                    assert_eq!(*range.start(), next, "gap or overlap at n={}, t={}", n, threads);
                    assert!(range.start() <= range.end());
                    next = range.end() + 1;
                }
                assert_eq!(next, n as u64 + 1, "range not covered at n={}, t={}", n, threads);
            }
        }
    }

    #[test]
    fn test_chunk_bounds_empty() {
        assert!(chunk_bounds(0, 4).is_empty());
        assert!(chunk_bounds(-10, 4).is_empty());
    }

    #[test]
    fn test_chunk_bounds_zero_threads() {
        assert_eq!(chunk_bounds(10, 0), vec![1..=10]);
    }

    #[test]
    fn test_small_n_skips_empty_chunks() {
        // 3 indices over 16 threads: one index per chunk, 13 chunks dropped
        assert_eq!(chunk_bounds(3, 16), vec![1..=1, 2..=2, 3..=3]);
    }

    #[test]
    fn test_huge_thread_count_is_bounded_by_n() {
        let chunks = chunk_bounds(10, usize::MAX);
        assert_eq!(chunks.len(), 10);
        assert_eq!(chunks[9], 10..=10);

        assert_eq!(sum_threaded(10, usize::MAX), sum_threaded(10, 10));
        assert_relative_eq!(
            sum_threaded(10, usize::MAX),
            sum_serial(10),
            epsilon = 1e-9,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_threaded_single_thread_is_exact() {
        for n in [0i64, 1, 10, 12_345] {
            assert_eq!(sum_threaded(n, 1), sum_serial(n));
        }
    }

    #[test]
    fn test_threaded_matches_serial() {
        for n in [10i64, 1_000, 100_003] {
            let expected = sum_serial(n);
            for threads in [2usize, 3, 4, 16] {
                assert_relative_eq!(
                    sum_threaded(n, threads),
                    expected,
                    epsilon = 1e-9,
                    max_relative = 1e-9
                );
            }
        }
    }

    #[test]
    fn test_parallel_matches_serial() {
        for n in [0i64, 1, 10, 1_000, 250_000] {
            assert_relative_eq!(
                sum_parallel(n),
                sum_serial(n),
                epsilon = 1e-9,
                max_relative = 1e-9
            );
        }
    }

    #[test]
    fn test_negative_is_zero() {
        assert_eq!(sum_parallel(-3), 0.0);
        assert_eq!(sum_threaded(-3, 4), 0.0);
    }
}
