//! Rayon row-parallel matrix multiply.

use crate::matrix::naive_ikj::{debug_check_dims, ikj_row};
use rayon::prelude::*;

/// Multi-threaded C = A * B, one output row per rayon task.
///
/// C is split into its n rows with `par_chunks_mut`, so each task owns a
/// disjoint row and only reads A and B. No locking is needed; rayon's
/// work stealing spreads the rows over the current pool and the call
/// returns after every row is done.
///
/// Each row runs the same i-k-j kernel as
/// [`matmul_ikj`](crate::matrix::naive_ikj::matmul_ikj), so the output is
/// bit-identical to the sequential version.
pub fn matmul_parallel(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    debug_check_dims(a, b, c, n);

    if n == 0 {
        return;
    }

    c[..n * n]
        .par_chunks_mut(n)
        .enumerate()
        .for_each(|(i, c_row)| ikj_row(a, b, c_row, i, n));
}
