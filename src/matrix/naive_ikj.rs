/// Cache-friendly square matrix multiplication using i-k-j loop order.
///
/// Computes C = A * B for n×n row-major matrices. C is zeroed first, so
/// whatever it held before is overwritten.
///
/// With k in the middle, the innermost loop walks one row of B and one
/// row of C with stride 1 while `a[i][k]` stays in a register. That alone
/// is several times faster than the naive i-j-k order on large matrices.
///
/// This is the sequential reference the parallel versions are checked
/// against: they run the same per-row kernel, so each element of C sees
/// the same additions in the same order and the results are bit-identical.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major, at least n² elements
/// * `b` - Matrix B (n × n), row-major, at least n² elements
/// * `c` - Matrix C (n × n), row-major, at least n² elements; only the
///   first n² are written
/// * `n` - Matrix dimension
///
/// # Example
///
/// ```
/// use speedup::matrix::naive_ikj::matmul_ikj;
///
/// let a = vec![1.0, 2.0,
///              3.0, 4.0];
/// let b = vec![5.0, 6.0,
///              7.0, 8.0];
/// let mut c = vec![f64::NAN; 4];
///
/// matmul_ikj(&a, &b, &mut c, 2);
///
/// assert_eq!(c, vec![19.0, 22.0,
///                    43.0, 50.0]);
/// ```
pub fn matmul_ikj(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    debug_check_dims(a, b, c, n);

    for (i, c_row) in c[..n * n].chunks_exact_mut(n.max(1)).enumerate() {
        ikj_row(a, b, c_row, i, n);
    }
}

/// Computes row `i` of C = A * B into `c_row` (length n).
///
/// The row is zeroed, then accumulated over k with j innermost. Every
/// multiply in the crate funnels through here so the per-element
/// accumulation order never differs between sequential and parallel runs.
#[inline]
pub(crate) fn ikj_row(a: &[f64], b: &[f64], c_row: &mut [f64], i: usize, n: usize) {
    c_row.fill(0.0);

    let a_row = &a[i * n..(i + 1) * n];
    for (k, &a_ik) in a_row.iter().enumerate() {
        let b_row = &b[k * n..(k + 1) * n];
        for (c_ij, &b_kj) in c_row.iter_mut().zip(b_row) {
            *c_ij += a_ik * b_kj;
        }
    }
}

/// Debug-build check that every buffer holds at least n² elements.
#[inline]
pub(crate) fn debug_check_dims(a: &[f64], b: &[f64], c: &[f64], n: usize) {
    let len = n * n;
    debug_assert!(a.len() >= len, "A: expected {}x{}={} elements, got {}", n, n, len, a.len());
    debug_assert!(b.len() >= len, "B: expected {}x{}={} elements, got {}", n, n, len, b.len());
    debug_assert!(c.len() >= len, "C: expected {}x{}={} elements, got {}", n, n, len, c.len());
}
