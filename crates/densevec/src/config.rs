use serde::{Deserialize, Serialize};

use crate::error::{Result, VectorError};

/// Parameters for building vectors with [`DenseVector::generate`](crate::DenseVector::generate).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GenerateConfig {
    /// Seed for the uniform generator.
    pub seed: u64,
    /// Inclusive lower bound of the uniform range.
    pub min: f64,
    /// Exclusive upper bound of the uniform range.
    pub max: f64,
    /// When set, every element takes this value and the range is ignored.
    pub fill: Option<f64>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            min: -1000.0,
            max: 1000.0,
            fill: None,
        }
    }
}

impl GenerateConfig {
    pub fn with_fill(value: f64) -> Self {
        Self {
            fill: Some(value),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.fill.is_some() {
            return Ok(());
        }
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(VectorError::InvalidConfig {
                reason: format!("bounds must be finite, got min={} max={}", self.min, self.max),
            });
        }
        if !(self.max - self.min).is_finite() {
            return Err(VectorError::InvalidConfig {
                reason: format!("range max - min overflows, got min={} max={}", self.min, self.max),
            });
        }
        if self.min >= self.max {
            return Err(VectorError::InvalidConfig {
                reason: format!("min ({}) must be below max ({})", self.min, self.max),
            });
        }
        Ok(())
    }
}
