//! Multi-threaded matrix multiplication.
//!
//! Both versions partition the output rows of C across workers and run
//! the sequential i-k-j row kernel on each, so results are bit-identical
//! to [`matmul_ikj`](crate::matrix::naive_ikj::matmul_ikj).
//!
//! Available implementations:
//! - `rows_rayon`: one row per rayon task on the current pool
//! - `rows_mt`: contiguous row blocks on scoped threads, adaptive count

pub mod rows_mt;
pub mod rows_rayon;
