//! Matrix inversion through augmented Gauss-Jordan elimination.

use ndarray::s;

use crate::elimination::GaussJordan;
use crate::error::{Error, Result};
use crate::matrix::zeros;
use crate::Matrix;

impl GaussJordan {
    /// Computes `A⁻¹` by reducing `[A | I]` until the left half is the identity.
    ///
    /// # Errors
    ///
    /// - [`Error::NotSquare`] if `a` is not square.
    /// - [`Error::Singular`] if the rank check or the augmented pass finds a
    ///   column without a pivot.
    pub fn invert(&self, a: &Matrix) -> Result<Matrix> {
        let (rows, cols) = a.dim();
        if rows != cols {
            log::warn!("cannot invert a {}x{} matrix", rows, cols);
            return Err(Error::NotSquare { rows, cols });
        }
        let n = rows;

        let reduced = self.reduce(a)?;
        if let Some(column) = self.rank_deficiency(&reduced) {
            log::warn!("matrix does not have {} pivots (column {})", n, column);
            return Err(Error::Singular { column });
        }

        let mut augmented = zeros(n, 2 * n)?;
        augmented.slice_mut(s![.., ..n]).assign(a);
        augmented.slice_mut(s![.., n..]).diag_mut().fill(1.0);

        let skipped = self.reduce_in_place(&mut augmented);
        if let Some(&column) = skipped.first() {
            log::warn!("augmented elimination found no pivot in column {}", column);
            return Err(Error::Singular { column });
        }

        let mut inverse = zeros(n, n)?;
        inverse.assign(&augmented.slice(s![.., n..]));
        Ok(inverse)
    }
}

/// Inverse of a square, non-singular matrix with the default solver settings.
pub fn invert(a: &Matrix) -> Result<Matrix> {
    GaussJordan::default().invert(a)
}
