use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors reported by [`DenseVector`](crate::math::DenseVector) operations.
#[derive(Debug)]
pub enum VectorError {
    /// Binary operation on vectors of different lengths.
    DimensionMismatch {
        op: &'static str,
        lhs: usize,
        rhs: usize,
    },
    /// The target file could not be opened.
    Io {
        op: &'static str,
        path: PathBuf,
        source: io::Error,
    },
    /// Reading or writing failed after the file or stream was opened.
    Stream {
        op: &'static str,
        path: PathBuf,
        source: io::Error,
    },
    /// The file content does not follow the count-then-values layout.
    Format {
        op: &'static str,
        path: PathBuf,
        reason: String,
    },
    InvalidConfig { reason: String },
}

impl VectorError {
    pub(crate) fn mismatch(op: &'static str, lhs: usize, rhs: usize) -> Self {
        log::trace!("{}: length mismatch ({} vs {})", op, lhs, rhs);
        VectorError::DimensionMismatch { op, lhs, rhs }
    }

    /// Name of the operation that failed, e.g. `"load"` or `"dot"`.
    pub fn op(&self) -> &'static str {
        match self {
            VectorError::DimensionMismatch { op, .. }
            | VectorError::Io { op, .. }
            | VectorError::Stream { op, .. }
            | VectorError::Format { op, .. } => op,
            VectorError::InvalidConfig { .. } => "config",
        }
    }
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VectorError::DimensionMismatch { op, lhs, rhs } => write!(
                f,
                "{}: operand with incompatible size : {} and {}",
                op, lhs, rhs
            ),
            VectorError::Io { op, path, source } => write!(
                f,
                "{}: error: can not open file: {} ({})",
                op,
                path.display(),
                source
            ),
            VectorError::Stream { op, path, source } => {
                write!(f, "{}: error: i/o failure on {}: {}", op, path.display(), source)
            }
            VectorError::Format { op, path, reason } => {
                write!(f, "{}: error: malformed file {}: {}", op, path.display(), reason)
            }
            VectorError::InvalidConfig { reason } => write!(f, "invalid configuration: {}", reason),
        }
    }
}

impl Error for VectorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            VectorError::Io { source, .. } | VectorError::Stream { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, VectorError>;
