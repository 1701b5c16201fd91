//! Helpers for building reference inputs and checking results.

/// Returns the n×n identity matrix, row-major.
pub fn identity(n: usize) -> Vec<f64> {
    let mut m = vec![0.0; n * n];
    for i in 0..n {
        m[i * n + i] = 1.0;
    }
    m
}

/// Largest absolute element-wise difference between two matrices.
///
/// Compares the common prefix if the lengths differ. Any NaN on either
/// side makes the result NaN.
pub fn max_abs_diff(x: &[f64], y: &[f64]) -> f64 {
    x.iter()
        .zip(y)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, |acc, d| if d.is_nan() || acc < d { d } else { acc })
}

/// True when both matrices have the same length and every pair of
/// elements is within `tol` of each other.
pub fn matrices_match(x: &[f64], y: &[f64], tol: f64) -> bool {
    x.len() == y.len() && max_abs_diff(x, y) <= tol
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert_eq!(identity(0), Vec::<f64>::new());
        assert_eq!(identity(3), vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_max_abs_diff() {
        assert_eq!(max_abs_diff(&[1.0, 2.0, 3.0], &[1.0, 2.5, 1.0]), 2.0);
        assert_eq!(max_abs_diff(&[], &[]), 0.0);
        assert!(max_abs_diff(&[f64::NAN, 0.0], &[0.0, 5.0]).is_nan());
    }

    #[test]
    fn test_matrices_match() {
        assert!(matrices_match(&[1.0, 2.0], &[1.0, 2.0 + 1e-12], 1e-9));
        assert!(!matrices_match(&[1.0, 2.0], &[1.0, 2.1], 1e-9));
        assert!(!matrices_match(&[1.0, 2.0], &[1.0], 1e-9));
        assert!(!matrices_match(&[f64::NAN], &[f64::NAN], 1e-9));
    }
}
