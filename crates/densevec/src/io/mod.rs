//! Persistence for [`DenseVector`](crate::DenseVector).
pub mod text;
