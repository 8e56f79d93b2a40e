//! Error type shared by every operation in the crate.

use thiserror::Error;

/// Failures reported by the containers, solvers and CSV helpers.
///
/// Every variant is a deterministic function of the inputs; retrying the same
/// call with the same arguments fails the same way.
#[derive(Debug, Error)]
pub enum Error {
    /// Operand dimensions are incompatible for the requested operation.
    #[error("{operation}: incompatible sizes ({left} vs {right})")]
    SizeMismatch {
        operation: &'static str,
        left: usize,
        right: usize,
    },

    #[error("matrix is not square ({rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },

    /// No usable pivot was found in `column`.
    #[error("matrix is singular: no pivot in column {column}")]
    Singular { column: usize },

    #[error("design matrix does not have full column rank (column {column})")]
    NotFullRank { column: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unable to allocate storage for {elements} elements")]
    AllocationFailure { elements: usize },

    #[error("invalid value {value:?} at row {row}, column {column}")]
    Parse {
        row: usize,
        column: usize,
        value: String,
    },

    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
