//! Sequential square matrix multiplication and result checking.
//!
//! `naive_ikj` is the correctness reference and the per-row kernel the
//! threaded versions reuse; `naive_ijk` is the textbook baseline it is
//! timed against.

pub mod naive_ijk;
pub mod naive_ikj;
pub mod verify;
