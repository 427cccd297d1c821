//! densevec: a dense `f64` vector for small linear-algebra workloads.
//!
//! The crate provides [`DenseVector`] with elementwise arithmetic, inner
//! product, L2 norm and normalization, a diagnostic `Display` rendering, and
//! a two-line plain-text file format (element count, then the values).
//!
//! Length mismatches and file failures are reported through [`VectorError`];
//! nothing in the crate installs a logger, it only emits through `log`.
pub mod config;
pub mod error;
pub mod io;
pub mod math;

pub use config::GenerateConfig;
pub use error::{Result, VectorError};
pub use math::{DenseVector, NORMALIZE_EPSILON};
