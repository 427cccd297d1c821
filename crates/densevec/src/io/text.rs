//! Plain-text vector files.
//!
//! Layout: the element count on the first line, then the values on the next
//! line separated by single spaces. The reader accepts any whitespace between
//! tokens and ignores anything after the last expected value.
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, VectorError};
use crate::math::DenseVector;

const STREAM: &str = "<stream>";

impl DenseVector {
    /// Write the vector to `path`, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| VectorError::Io {
            op: "save",
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        encode(self, &mut writer)
            .and_then(|_| writer.flush())
            .map_err(|source| VectorError::Stream {
                op: "save",
                path: path.to_path_buf(),
                source,
            })?;
        log::debug!("Saved {} values to {}", self.len(), path.display());
        Ok(())
    }

    /// Replace the contents of `self` with the vector stored at `path`.
    ///
    /// The length follows the stored count. On error `self` is unchanged.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|source| VectorError::Io {
            op: "load",
            path: path.to_path_buf(),
            source,
        })?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|source| VectorError::Stream {
                op: "load",
                path: path.to_path_buf(),
                source,
            })?;
        self.install(&content, path)?;
        log::debug!("Loaded {} values from {}", self.len(), path.display());
        Ok(())
    }

    /// Convenience constructor around [`DenseVector::load`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<DenseVector> {
        let mut vector = DenseVector::default();
        vector.load(path)?;
        Ok(vector)
    }

    /// Write the file layout to an arbitrary writer.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        encode(self, &mut writer).map_err(|source| VectorError::Stream {
            op: "save",
            path: PathBuf::from(STREAM),
            source,
        })
    }

    /// Read the file layout from an arbitrary reader.
    pub fn read_from<R: Read>(&mut self, mut reader: R) -> Result<()> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|source| VectorError::Stream {
                op: "load",
                path: PathBuf::from(STREAM),
                source,
            })?;
        self.install(&content, Path::new(STREAM))
    }

    fn install(&mut self, content: &str, path: &Path) -> Result<()> {
        let values = decode(content).map_err(|reason| VectorError::Format {
            op: "load",
            path: path.to_path_buf(),
            reason,
        })?;
        if values.len() != self.len() {
            log::trace!("Reallocating vector from {} to {} values", self.len(), values.len());
        }
        *self = DenseVector::from_vec(values);
        Ok(())
    }
}

fn encode<W: Write>(vector: &DenseVector, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "{}", vector.len())?;
    for (idx, value) in vector.iter().enumerate() {
        if idx > 0 {
            write!(writer, " ")?;
        }
        write!(writer, "{}", value)?;
    }
    writeln!(writer)
}

fn decode(content: &str) -> std::result::Result<Vec<f64>, String> {
    let mut tokens = content.split_whitespace();
    let count_token = tokens
        .next()
        .ok_or_else(|| "missing element count".to_string())?;
    let count: usize = count_token
        .parse()
        .map_err(|_| format!("invalid element count '{}'", count_token))?;

    // The count is untrusted; grow from the tokens actually present.
    let mut values = Vec::with_capacity(count.min(content.len() / 2 + 1));
    for idx in 0..count {
        let token = tokens
            .next()
            .ok_or_else(|| format!("expected {} values, found {}", count, idx))?;
        let value: f64 = token
            .parse()
            .map_err(|_| format!("invalid value '{}' at position {}", token, idx))?;
        values.push(value);
    }
    Ok(values)
}
