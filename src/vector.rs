use crate::error::{Error, Result};
use crate::Vector;

/// Reserves a zero-filled buffer of `len` doubles, reporting failure instead of aborting.
pub(crate) fn zeroed_buffer(len: usize) -> Result<Vec<f64>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailure { elements: len })?;
    buffer.resize(len, 0.0);
    Ok(buffer)
}

/// Creates a zero-filled vector with `rows` entries.
pub fn zeros(rows: usize) -> Result<Vector> {
    Ok(Vector::from(zeroed_buffer(rows)?))
}

/// Inner product of two vectors of equal length.
pub fn dot(a: &Vector, b: &Vector) -> Result<f64> {
    if a.len() != b.len() {
        log::warn!("dot product on vectors of length {} and {}", a.len(), b.len());
        return Err(Error::SizeMismatch {
            operation: "dot product",
            left: a.len(),
            right: b.len(),
        });
    }

    Ok(a.iter().zip(b.iter()).map(|(x, y)| x * y).sum())
}
