//! Series reduction: `Σ ln(i)/i` for `i` in `1..=n`.
//!
//! Every term costs a logarithm and a division and no term depends on
//! another, so the sum splits cleanly across workers. The only thing that
//! changes between variants is the order partial sums are added in.
//!
//! Available implementations:
//! - `sum_serial`: single pass, strictly increasing `i`
//! - `parallel::sum_parallel`: rayon fork-join on the current pool
//! - `parallel::sum_threaded`: fixed number of scoped threads, one chunk each

pub mod parallel;

/// One term of the series: `ln(i) / i`.
#[inline]
pub fn term(i: u64) -> f64 {
    let x = i as f64;
    x.ln() / x
}

/// Sequential reference sum of `ln(i)/i` for `i = 1..=n`.
///
/// Terms are added in increasing order of `i`. An empty range (`n <= 0`)
/// sums to exactly `0.0`.
///
/// # Example
///
/// ```
/// use speedup::series::sum_serial;
///
/// assert_eq!(sum_serial(0), 0.0);
/// assert_eq!(sum_serial(-5), 0.0);
/// assert!((sum_serial(2) - 2f64.ln() / 2.0).abs() < 1e-15);
/// ```
pub fn sum_serial(n: i64) -> f64 {
    let mut sum = 0.0;
    for i in 1..=upper_bound(n) {
        sum += term(i);
    }
    sum
}

/// Clamps a signed length to the last index of the series.
pub(crate) fn upper_bound(n: i64) -> u64 {
    n.max(0) as u64
}
