//! Synthetic regression problems with a known solution.
//!
//! ```rust
//! use olskit::datasets::diagonally_dominant;
//! use olskit::ols;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let (x, y) = diagonally_dominant(8, 8, &mut rng).unwrap();
//! let x_hat = ols(&x, &y).unwrap();
//! assert!(x_hat.iter().all(|v| (v - 1.0).abs() < 1e-3));
//! ```

use ndarray::Axis;
use ndarray_rand::rand::Rng;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;

use crate::error::{Error, Result};
use crate::{Matrix, Vector};

/// Generates a `rows x cols` design matrix and a target vector whose exact
/// least-squares solution is a vector of ones.
///
/// Off-diagonal entries are drawn uniformly from `[0, 1)` and every diagonal
/// entry gets `rows` added, which makes the leading square block strictly
/// diagonally dominant and hence of full rank. Each target is the sum of its
/// row, so `y = X · 1`.
pub fn diagonally_dominant<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    rng: &mut R,
) -> Result<(Matrix, Vector)> {
    if cols > rows {
        return Err(Error::InvalidArgument(format!(
            "need at least as many rows as columns, got {}x{}",
            rows, cols
        )));
    }

    log::debug!("generating a {}x{} diagonally dominant matrix", rows, cols);

    let mut x = Matrix::random_using((rows, cols), Uniform::new(0.0, 1.0), rng);
    x.diag_mut().mapv_inplace(|v| v + rows as f64);
    let y = x.sum_axis(Axis(1));

    Ok((x, y))
}
