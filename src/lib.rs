//! Sequential vs. fork-join parallel numeric kernels.
//!
//! I built this to see how much a multi-core box actually buys on two
//! textbook workloads: a compute-bound reduction (`Σ ln(i)/i`) and a
//! memory-bound square matrix multiply. Each comes as a sequential
//! reference plus parallel versions with the same contract, so they can be
//! timed side by side and checked against each other.
//!
//! ## Usage
//!
//! ```
//! use speedup::{sum_parallel, sum_serial};
//!
//! let serial = sum_serial(100_000);
//! let parallel = sum_parallel(100_000);
//!
//! assert!((serial - parallel).abs() <= 1e-9 * serial.abs().max(1.0));
//! ```
//!
//! Matrix multiply writes into a buffer you own:
//!
//! ```
//! use speedup::{multiply, multiply_parallel};
//!
//! let n = 128;
//! let a: Vec<f64> = (0..n * n).map(|i| (i % 7) as f64).collect();
//! let b: Vec<f64> = (0..n * n).map(|i| (i % 5) as f64).collect();
//! let mut c_seq = vec![0.0f64; n * n];
//! let mut c_par = vec![0.0f64; n * n];
//!
//! multiply(&a, &b, &mut c_seq, n);
//! multiply_parallel(&a, &b, &mut c_par, n);
//!
//! assert_eq!(c_seq, c_par);
//! ```
//!
//! ## What's inside
//!
//! - Series sum: serial, rayon, and fixed-thread-count scoped threads
//! - Matrix multiply: naive i-j-k baseline, cache-friendly i-k-j, rayon
//!   row-parallel, and adaptive scoped-thread row blocks
//! - Dedicated rayon pools for pinning worker counts
//!
//! The reductions agree to within floating-point reassociation. The
//! matrix kernels share one per-row kernel and agree bit for bit.

pub mod matrix;
pub mod pool;
pub mod series;
pub mod threaded;

pub use matrix::naive_ijk::matmul_naive_ijk;
pub use matrix::naive_ikj::matmul_ikj;
pub use series::parallel::{sum_parallel, sum_threaded};
pub use series::sum_serial;
pub use threaded::rows_mt::matmul_threaded;
pub use threaded::rows_rayon::matmul_parallel;

/// Matrix multiply: C = A * B for n×n row-major matrices, single thread.
///
/// C is zeroed before accumulation. Each buffer must hold at least n²
/// elements (checked in debug builds); only the first n² elements of C
/// are written. `n == 0` does nothing.
pub fn multiply(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    matmul_ikj(a, b, c, n);
}

/// Same as [`multiply`] but splits the rows of C across rayon's pool.
///
/// The result is bit-identical to [`multiply`].
pub fn multiply_parallel(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    matmul_parallel(a, b, c, n);
}
