//! Dense vector type and its arithmetic.
//!
//! `DenseVector` owns a contiguous `Vec<f64>`; elementwise operations iterate
//! the storage directly so they carry no per-element bounds checks.
pub mod vector;

pub use vector::{DenseVector, NORMALIZE_EPSILON};
