//! Worker pools for the rayon-based kernels.
//!
//! The rayon kernels run on whatever pool they are called from. Called
//! directly, that is rayon's global pool: created on first use, sized to
//! the available parallelism, alive for the rest of the process. To pin a
//! run to a fixed worker count, build a dedicated pool and call the kernel
//! inside [`ThreadPool::install`].
//!
//! ```
//! use speedup::pool::build_pool;
//! use speedup::sum_parallel;
//!
//! let pool = build_pool(4).unwrap();
//! let sum = pool.install(|| sum_parallel(10_000));
//! assert!(sum > 0.0);
//! ```

use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

/// Builds a dedicated pool with exactly `num_threads` workers.
///
/// `num_threads == 0` lets rayon pick (available parallelism, or
/// `RAYON_NUM_THREADS` when set). Workers are named `speedup-worker-{i}`.
pub fn build_pool(num_threads: usize) -> Result<ThreadPool, ThreadPoolBuildError> {
    ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .thread_name(|i| format!("speedup-worker-{}", i))
        .build()
}

/// Number of workers in the pool the caller is currently running on.
pub fn worker_count() -> usize {
    rayon::current_num_threads()
}
