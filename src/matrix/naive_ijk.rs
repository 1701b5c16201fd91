use super::naive_ikj::debug_check_dims;

/// Naive square matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple loop: one dot product per element of C.
/// It's slow because the innermost loop reads B with stride `n`
/// (column-wise), missing cache on nearly every step once a column no
/// longer fits.
///
/// Use this as the baseline the i-k-j order is timed against, not for
/// performance. Each element of C is overwritten, never accumulated into.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, overwritten with A * B
/// * `n` - Matrix dimension
pub fn matmul_naive_ijk(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    debug_check_dims(a, b, c, n);

    for i in 0..n {
        for j in 0..n {
            let mut sum = 0.0;
            for k in 0..n {
                sum += a[i * n + k] * b[k * n + j];
            }
            c[i * n + j] = sum;
        }
    }
}
