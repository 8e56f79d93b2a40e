//! Dense row-major matrix operations.
//!
//! Every transform takes its operands by reference and returns a freshly
//! allocated [`Matrix`] or [`Vector`]; only [`swap_rows`] works in place.

use crate::error::{Error, Result};
use crate::vector::zeroed_buffer;
use crate::{Matrix, Vector};

/// Creates a zero-filled `rows x cols` matrix backed by one flat buffer.
pub fn zeros(rows: usize, cols: usize) -> Result<Matrix> {
    let len = rows
        .checked_mul(cols)
        .ok_or(Error::AllocationFailure { elements: usize::MAX })?;
    let data = zeroed_buffer(len)?;
    Ok(Matrix::from_shape_vec((rows, cols), data)?)
}

/// Creates the `n x n` identity matrix.
pub fn identity(n: usize) -> Result<Matrix> {
    let mut eye = zeros(n, n)?;
    eye.diag_mut().fill(1.0);
    Ok(eye)
}

/// Builds a matrix from row-major data supplied by a caller or reader.
pub fn from_shape_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Matrix> {
    let expected = rows.saturating_mul(cols);
    if data.len() != expected {
        return Err(Error::SizeMismatch {
            operation: "matrix construction",
            left: expected,
            right: data.len(),
        });
    }
    Ok(Matrix::from_shape_vec((rows, cols), data)?)
}

/// Returns a deep copy of `a`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when no matrix is given.
pub fn copy(a: Option<&Matrix>) -> Result<Matrix> {
    let a = a.ok_or_else(|| Error::InvalidArgument("the given matrix does not exist".to_string()))?;
    let mut b = zeros(a.nrows(), a.ncols())?;
    b.assign(a);
    Ok(b)
}

pub fn transpose(a: &Matrix) -> Result<Matrix> {
    let mut t = zeros(a.ncols(), a.nrows())?;
    for i in 0..a.ncols() {
        for j in 0..a.nrows() {
            t[(i, j)] = a[(j, i)];
        }
    }
    Ok(t)
}

/// Computes `b = A x`.
pub fn matrix_vector_product(a: &Matrix, x: &Vector) -> Result<Vector> {
    if a.ncols() != x.len() {
        log::warn!(
            "matrix-vector product: {}x{} matrix against vector of length {}",
            a.nrows(),
            a.ncols(),
            x.len()
        );
        return Err(Error::SizeMismatch {
            operation: "matrix-vector product",
            left: a.ncols(),
            right: x.len(),
        });
    }

    let mut b = crate::vector::zeros(a.nrows())?;
    for i in 0..a.nrows() {
        for j in 0..a.ncols() {
            b[i] += a[(i, j)] * x[j];
        }
    }
    Ok(b)
}

/// Computes `C = A B` with the textbook triple loop.
///
/// Matrix multiplication is not commutative; `A.cols` must equal `B.rows`.
pub fn matrix_product(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.ncols() != b.nrows() {
        log::warn!(
            "matrix product: A is {}x{}, B is {}x{}",
            a.nrows(),
            a.ncols(),
            b.nrows(),
            b.ncols()
        );
        return Err(Error::SizeMismatch {
            operation: "matrix product",
            left: a.ncols(),
            right: b.nrows(),
        });
    }

    let mut c = zeros(a.nrows(), b.ncols())?;
    for i in 0..a.nrows() {
        for j in 0..b.ncols() {
            let mut sum = 0.0;
            for k in 0..a.ncols() {
                sum += a[(i, k)] * b[(k, j)];
            }
            c[(i, j)] = sum;
        }
    }
    Ok(c)
}

/// Exchanges rows `r1` and `r2` in place.
///
/// # Panics
///
/// Panics if either row index is out of bounds.
pub fn swap_rows(a: &mut Matrix, r1: usize, r2: usize) {
    if r1 == r2 {
        return;
    }
    let cols = a.ncols();
    let (lo, hi) = if r1 < r2 { (r1, r2) } else { (r2, r1) };
    assert!(hi < a.nrows(), "row index {} out of bounds", hi);

    match a.as_slice_mut() {
        Some(data) => {
            let (head, tail) = data.split_at_mut(hi * cols);
            head[lo * cols..(lo + 1) * cols].swap_with_slice(&mut tail[..cols]);
        }
        None => {
            for j in 0..cols {
                a.swap((lo, j), (hi, j));
            }
        }
    }
}
