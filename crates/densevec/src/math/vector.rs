use std::fmt;
use std::io::{self, Write};
use std::iter::FromIterator;
use std::ops::{Index, IndexMut, Mul, MulAssign, Neg};
use std::slice::{Iter, IterMut};

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GenerateConfig;
use crate::error::{Result, VectorError};

/// Norms below this value are treated as zero by [`DenseVector::normalize`].
pub const NORMALIZE_EPSILON: f64 = 1.0e-10;

const EMPTY_SENTINEL: &str = "Not initialized yet -> size is 0";

/// Owning, resizable vector of `f64` for linear-algebra style computation.
///
/// Cloning performs a deep copy. Binary operations require operands of equal
/// length and report [`VectorError::DimensionMismatch`] otherwise.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DenseVector {
    data: Vec<f64>,
}

impl DenseVector {
    /// Vector of `len` zeros.
    pub fn new(len: usize) -> Self {
        Self::zeros(len)
    }

    pub fn zeros(len: usize) -> Self {
        Self::from_elem(len, 0.0)
    }

    /// Vector of `len` copies of `value`.
    pub fn from_elem(len: usize, value: f64) -> Self {
        Self::from_vec(vec![value; len])
    }

    pub fn from_vec(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// Vector of `len` samples drawn uniformly from `[low, high)`.
    pub fn random_uniform<R: Rng + ?Sized>(
        len: usize,
        low: f64,
        high: f64,
        rng: &mut R,
    ) -> Result<Self> {
        if !(high - low).is_finite() || low >= high {
            return Err(VectorError::InvalidConfig {
                reason: format!("uniform range [{}, {}) is empty or too wide", low, high),
            });
        }
        let dist = Uniform::new(low, high);
        Ok(dist.sample_iter(rng).take(len).collect())
    }

    /// Build a vector of `len` elements following `config`: the fill value
    /// when one is set, seeded uniform samples otherwise.
    pub fn generate(len: usize, config: &GenerateConfig) -> Result<Self> {
        config.validate()?;
        match config.fill {
            Some(value) => Ok(Self::from_elem(len, value)),
            None => {
                let mut rng = StdRng::seed_from_u64(config.seed);
                Self::random_uniform(len, config.min, config.max, &mut rng)
            }
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Replace the contents and length of `self` with those of `other`.
    pub fn assign(&mut self, other: &DenseVector) {
        self.data.clone_from(&other.data);
    }

    /// Change the length in place; new trailing elements are zero.
    pub fn resize(&mut self, len: usize) {
        self.data.resize(len, 0.0);
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, f64> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    pub fn get(&self, index: usize) -> Option<&f64> {
        self.data.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut f64> {
        self.data.get_mut(index)
    }

    /// Element access without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `self.len()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &f64 {
        self.data.get_unchecked(index)
    }

    /// Mutable element access without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `self.len()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut f64 {
        self.data.get_unchecked_mut(index)
    }

    fn zip_with<F>(&self, other: &DenseVector, op: &'static str, f: F) -> Result<DenseVector>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.len() != other.len() {
            return Err(VectorError::mismatch(op, self.len(), other.len()));
        }
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| f(*a, *b))
            .collect())
    }

    /// Elementwise sum.
    pub fn try_add(&self, other: &DenseVector) -> Result<DenseVector> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    /// Elementwise difference `self - other`.
    pub fn try_sub(&self, other: &DenseVector) -> Result<DenseVector> {
        self.zip_with(other, "sub", |a, b| a - b)
    }

    /// New vector with every element multiplied by `value`.
    pub fn scale(&self, value: f64) -> DenseVector {
        self.data.iter().map(|v| v * value).collect()
    }

    /// Inner product, accumulated left to right.
    pub fn dot(&self, other: &DenseVector) -> Result<f64> {
        if self.len() != other.len() {
            return Err(VectorError::mismatch("dot", self.len(), other.len()));
        }
        Ok(dot_scalar_f64(self.as_slice(), other.as_slice()))
    }

    /// Euclidean (L2) norm; zero for an empty vector.
    pub fn norm(&self) -> f64 {
        dot_scalar_f64(self.as_slice(), self.as_slice()).sqrt()
    }

    /// Rescale in place to unit norm.
    ///
    /// Vectors whose norm is below [`NORMALIZE_EPSILON`] are left untouched.
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm.abs() < NORMALIZE_EPSILON {
            return;
        }
        for v in self.data.iter_mut() {
            *v /= norm;
        }
    }

    /// Write the elements on one line, each followed by a space.
    pub fn write_plain<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for v in self.data.iter() {
            write!(writer, "{} ", v)?;
        }
        writeln!(writer)
    }

    /// Print the elements on one line to stdout.
    pub fn display(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_plain(&mut handle)
    }
}

fn dot_scalar_f64(lhs: &[f64], rhs: &[f64]) -> f64 {
    lhs.iter()
        .zip(rhs.iter())
        .fold(0.0, |acc, (a, b)| acc + a * b)
}

impl From<Vec<f64>> for DenseVector {
    fn from(value: Vec<f64>) -> Self {
        DenseVector::from_vec(value)
    }
}

impl From<&[f64]> for DenseVector {
    fn from(value: &[f64]) -> Self {
        DenseVector::from_vec(value.to_vec())
    }
}

impl From<DenseVector> for Vec<f64> {
    fn from(value: DenseVector) -> Self {
        value.data
    }
}

impl FromIterator<f64> for DenseVector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        DenseVector::from_vec(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a DenseVector {
    type Item = &'a f64;
    type IntoIter = Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

// Out-of-range indices are a caller error; use `get` for a checked lookup.
impl Index<usize> for DenseVector {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl IndexMut<usize> for DenseVector {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl Neg for &DenseVector {
    type Output = DenseVector;

    fn neg(self) -> Self::Output {
        self.data.iter().map(|v| -v).collect()
    }
}

impl Neg for DenseVector {
    type Output = DenseVector;

    fn neg(mut self) -> Self::Output {
        for v in self.data.iter_mut() {
            *v = -*v;
        }
        self
    }
}

impl Mul<f64> for &DenseVector {
    type Output = DenseVector;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<f64> for DenseVector {
    type Output = DenseVector;

    fn mul(mut self, rhs: f64) -> Self::Output {
        self *= rhs;
        self
    }
}

impl Mul<&DenseVector> for f64 {
    type Output = DenseVector;

    fn mul(self, rhs: &DenseVector) -> Self::Output {
        rhs * self
    }
}

impl Mul<DenseVector> for f64 {
    type Output = DenseVector;

    fn mul(self, rhs: DenseVector) -> Self::Output {
        rhs * self
    }
}

impl MulAssign<f64> for DenseVector {
    fn mul_assign(&mut self, rhs: f64) {
        for v in self.data.iter_mut() {
            *v *= rhs;
        }
    }
}

impl fmt::Display for DenseVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.is_empty() {
            return write!(f, "{}", EMPTY_SENTINEL);
        }
        write!(f, "(")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, " , ")?;
            }
        }
        write!(f, ")")
    }
}
