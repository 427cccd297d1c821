use std::path::Path;

use anyhow::{Context, Result};
use densevec::{DenseVector, GenerateConfig};

/// Load a vector file, attaching the path to any failure.
pub fn read_vector<P: AsRef<Path>>(path: P) -> Result<DenseVector> {
    let path = path.as_ref();
    let vector = DenseVector::from_file(path)
        .with_context(|| format!("Failed to read vector: {}", path.display()))?;
    log::info!("Loaded {} values from {}", vector.len(), path.display());
    Ok(vector)
}

/// Save `vector` to `output`, or print its rendering to stdout when no
/// output path is given.
pub fn emit(vector: &DenseVector, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            vector
                .save(path)
                .with_context(|| format!("Failed to write vector: {}", path.display()))?;
            log::info!("Wrote {} values to {}", vector.len(), path.display());
        }
        None => println!("{}", vector),
    }
    Ok(())
}

pub fn generate(len: usize, config: &GenerateConfig, output: &Path) -> Result<DenseVector> {
    let vector = DenseVector::generate(len, config).context("Failed to generate vector")?;
    emit(&vector, Some(output))?;
    Ok(vector)
}

pub fn show<P: AsRef<Path>>(path: P) -> Result<String> {
    Ok(read_vector(path)?.to_string())
}

pub fn norm<P: AsRef<Path>>(path: P) -> Result<f64> {
    Ok(read_vector(path)?.norm())
}

pub fn dot<P: AsRef<Path>>(lhs: P, rhs: P) -> Result<f64> {
    let a = read_vector(&lhs)?;
    let b = read_vector(&rhs)?;
    a.dot(&b).with_context(|| {
        format!(
            "Cannot compute dot product of {} and {}",
            lhs.as_ref().display(),
            rhs.as_ref().display()
        )
    })
}

pub fn add<P: AsRef<Path>>(lhs: P, rhs: P) -> Result<DenseVector> {
    let a = read_vector(&lhs)?;
    let b = read_vector(&rhs)?;
    a.try_add(&b).with_context(|| {
        format!(
            "Cannot add {} and {}",
            lhs.as_ref().display(),
            rhs.as_ref().display()
        )
    })
}

pub fn sub<P: AsRef<Path>>(lhs: P, rhs: P) -> Result<DenseVector> {
    let a = read_vector(&lhs)?;
    let b = read_vector(&rhs)?;
    a.try_sub(&b).with_context(|| {
        format!(
            "Cannot subtract {} from {}",
            rhs.as_ref().display(),
            lhs.as_ref().display()
        )
    })
}

pub fn scale<P: AsRef<Path>>(path: P, factor: f64) -> Result<DenseVector> {
    Ok(read_vector(path)? * factor)
}

pub fn neg<P: AsRef<Path>>(path: P) -> Result<DenseVector> {
    Ok(-read_vector(path)?)
}

pub fn normalize<P: AsRef<Path>>(path: P) -> Result<DenseVector> {
    let mut vector = read_vector(path)?;
    vector.normalize();
    Ok(vector)
}
