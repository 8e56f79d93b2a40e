//! Gauss-Jordan elimination to reduced row-echelon form.
//!
//! Pivots are taken on the main diagonal: for each `i < min(rows, cols)` the
//! pivot for column `i` is moved into row `i`, normalised to one, and column
//! `i` is cleared in every other row, above and below. A column with no usable
//! pivot is skipped, which leaves the zero row that marks a singular matrix.
//!
//! The pivot zero test is relative: an entry is negligible when its magnitude is
//! at most `pivot_tolerance` times the largest magnitude in the pivot columns.
//!
//! ```rust
//! use olskit::elimination::eliminate;
//! use ndarray::array;
//!
//! let a = array![[2.0, 3.0, 4.0], [5.0, 6.0, 7.0], [8.0, 9.0, 10.0]];
//! let r = eliminate(&a).unwrap();
//! assert!(r[(2, 2)].abs() < 1e-9);
//! ```

use ndarray::s;

use crate::error::Result;
use crate::matrix::{copy, swap_rows};
use crate::Matrix;

/// Zero test applied while searching for pivots, relative to the largest entry.
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-12;

/// Zero test applied to the diagonal of a reduced matrix when checking rank.
pub const DEFAULT_RANK_TOLERANCE: f64 = 1e-9;

/// How the pivot row for a column is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PivotStrategy {
    /// First row at or below the diagonal whose entry is not negligible.
    #[default]
    FirstNonZero,
    /// Row at or below the diagonal with the largest magnitude entry (partial pivoting).
    MaxMagnitude,
}

/// Configured Gauss-Jordan solver.
#[derive(Clone, Debug)]
pub struct GaussJordan {
    pivot_tolerance: f64,
    rank_tolerance: f64,
    pivoting: PivotStrategy,
}

impl GaussJordan {
    pub fn new() -> Self {
        Self {
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
            rank_tolerance: DEFAULT_RANK_TOLERANCE,
            pivoting: PivotStrategy::default(),
        }
    }

    pub fn pivot_tolerance(mut self, tolerance: f64) -> Self {
        if tolerance.is_nan() || tolerance < 0.0 {
            panic!("pivot_tolerance must be non-negative, got {}", tolerance);
        }
        self.pivot_tolerance = tolerance;
        self
    }

    pub fn rank_tolerance(mut self, tolerance: f64) -> Self {
        if tolerance.is_nan() || tolerance < 0.0 {
            panic!("rank_tolerance must be non-negative, got {}", tolerance);
        }
        self.rank_tolerance = tolerance;
        self
    }

    pub fn pivoting(mut self, pivoting: PivotStrategy) -> Self {
        self.pivoting = pivoting;
        self
    }

    /// Returns the reduced row-echelon form of `a`, leaving `a` untouched.
    pub fn reduce(&self, a: &Matrix) -> Result<Matrix> {
        let mut r = copy(Some(a))?;
        let skipped = self.reduce_in_place(&mut r);
        if !skipped.is_empty() {
            log::debug!("no pivot found in columns {:?}", skipped);
        }
        Ok(r)
    }

    /// Reduces `r` in place and returns the diagonal columns that had no pivot.
    /// The negligible entries left at and below the diagonal of a skipped
    /// column are flushed to zero.
    pub(crate) fn reduce_in_place(&self, r: &mut Matrix) -> Vec<usize> {
        let diagonal_len = r.nrows().min(r.ncols());
        let threshold = self.pivot_threshold(r, diagonal_len);
        let mut skipped = Vec::new();

        for i in 0..diagonal_len {
            let Some(pivot) = self.find_pivot(r, i, threshold) else {
                r.slice_mut(s![i.., i]).fill(0.0);
                skipped.push(i);
                continue;
            };

            swap_rows(r, pivot, i);

            let pivot_val = r[(i, i)];
            log::trace!("column {}: pivot {} taken from row {}", i, pivot_val, pivot);
            r.row_mut(i).mapv_inplace(|v| v / pivot_val);

            let pivot_row = r.row(i).to_owned();
            for j in 0..r.nrows() {
                if j == i {
                    continue;
                }
                let factor = r[(j, i)];
                if factor != 0.0 {
                    r.row_mut(j).scaled_add(-factor, &pivot_row);
                }
            }
        }

        skipped
    }

    /// Index of the first diagonal entry of a reduced matrix that is negligible
    /// under the rank tolerance, if any.
    pub fn rank_deficiency(&self, reduced: &Matrix) -> Option<usize> {
        let diagonal_len = reduced.nrows().min(reduced.ncols());
        (0..diagonal_len).find(|&i| reduced[(i, i)].abs() < self.rank_tolerance)
    }

    /// Absolute pivot threshold for `r`, scaled by the largest magnitude in its
    /// first `pivot_cols` columns. Columns past those (the identity block of an
    /// augmented inversion) do not affect the scale.
    fn pivot_threshold(&self, r: &Matrix, pivot_cols: usize) -> f64 {
        let scale = r
            .slice(s![.., ..pivot_cols])
            .iter()
            .fold(0.0_f64, |acc, v| acc.max(v.abs()));
        if scale > 0.0 && scale.is_finite() {
            self.pivot_tolerance * scale
        } else {
            self.pivot_tolerance
        }
    }

    fn find_pivot(&self, r: &Matrix, col: usize, threshold: f64) -> Option<usize> {
        let mut candidates = col..r.nrows();
        match self.pivoting {
            PivotStrategy::FirstNonZero => {
                candidates.find(|&row| !is_negligible(r[(row, col)], threshold))
            }
            PivotStrategy::MaxMagnitude => candidates
                .max_by(|&a, &b| r[(a, col)].abs().total_cmp(&r[(b, col)].abs()))
                .filter(|&row| !is_negligible(r[(row, col)], threshold)),
        }
    }
}

fn is_negligible(value: f64, threshold: f64) -> bool {
    value.abs() <= threshold
}

impl Default for GaussJordan {
    fn default() -> Self {
        Self::new()
    }
}

/// Reduced row-echelon form of `a` with the default solver settings.
pub fn eliminate(a: &Matrix) -> Result<Matrix> {
    GaussJordan::default().reduce(a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_upper_triangular_unit_diagonal() {
        let u = array![[1.0, 1.0, 1.0], [0.0, 1.0, 1.0], [0.0, 0.0, 1.0]];
        let r = eliminate(&u).unwrap();

        assert_abs_diff_eq!(r, Matrix::eye(3), epsilon = 1e-4);
    }

    #[test]
    fn test_upper_triangular() {
        let u = array![[2.0, 3.0, 4.0], [0.0, 4.0, 5.0], [0.0, 0.0, 6.0]];
        let r = eliminate(&u).unwrap();

        assert_abs_diff_eq!(r, Matrix::eye(3), epsilon = 1e-4);
    }

    #[test]
    fn test_dependent_row() {
        let a = array![[2.0, 3.0, 4.0], [5.0, 6.0, 7.0], [8.0, 9.0, 10.0]];
        let r = eliminate(&a).unwrap();

        let expected = array![[1.0, 0.0, -1.0], [0.0, 1.0, 2.0], [0.0, 0.0, 0.0]];
        assert_abs_diff_eq!(r, expected, epsilon = 1e-4);
        assert!(r[(2, 2)].abs() < 1e-4);
    }

    #[test]
    fn test_tall_matrix_with_repeated_row() {
        let v = array![
            [2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0],
            [8.0, 9.0, 10.0],
            [8.0, 9.0, 10.0]
        ];
        let r = eliminate(&v).unwrap();

        assert_abs_diff_eq!(r[(0, 2)], -1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(r[(1, 2)], 2.0, epsilon = 1e-4);
        assert_abs_diff_eq!(r[(2, 2)], 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(r[(3, 2)], 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_zero_column_is_skipped() {
        let a = array![[0.0, 1.0], [0.0, 2.0]];
        let mut r = a.clone();
        let skipped = GaussJordan::new().reduce_in_place(&mut r);

        assert_eq!(skipped, vec![0]);
        assert_abs_diff_eq!(r, array![[0.0, 0.0], [0.0, 1.0]], epsilon = 1e-12);
    }

    #[test]
    fn test_input_untouched() {
        let a = array![[0.0, 2.0], [3.0, 1.0]];
        let before = a.clone();
        let _ = eliminate(&a).unwrap();
        assert_eq!(a, before);
    }

    #[test]
    fn test_idempotent() {
        let a = array![[4.0, -2.0, 1.0], [3.0, 6.0, -4.0], [2.0, 1.0, 8.0], [1.0, 1.0, 1.0]];
        let once = eliminate(&a).unwrap();
        let twice = eliminate(&once).unwrap();
        assert_abs_diff_eq!(once, twice, epsilon = 1e-12);

        let singular = array![[2.0, 3.0, 4.0], [5.0, 6.0, 7.0], [8.0, 9.0, 10.0]];
        let once = eliminate(&singular).unwrap();
        let twice = eliminate(&once).unwrap();
        assert_abs_diff_eq!(once, twice, epsilon = 1e-12);
    }

    #[test]
    fn test_round_off_treated_as_zero() {
        let a = array![[1.0, 1.0], [1.0, 1.0 + 1e-14]];
        let r = eliminate(&a).unwrap();
        assert!(r[(1, 1)].abs() < 1e-12);
        assert_eq!(GaussJordan::new().rank_deficiency(&r), Some(1));
    }

    #[test]
    fn test_small_scale_full_rank() {
        let a = array![[2e-13, 1e-13], [1e-13, 3e-13]];
        let r = eliminate(&a).unwrap();

        assert_abs_diff_eq!(r, Matrix::eye(2), epsilon = 1e-9);
        assert_eq!(GaussJordan::new().rank_deficiency(&r), None);
    }

    #[test]
    fn test_large_scale_round_off_treated_as_zero() {
        let a = array![[1e8, 1e8], [1e8, 1e8 + 1e-6]];
        let r = eliminate(&a).unwrap();

        assert_abs_diff_eq!(r[(1, 1)], 0.0, epsilon = 1e-12);
        assert_eq!(GaussJordan::new().rank_deficiency(&r), Some(1));
    }

    #[test]
    fn test_max_magnitude_pivoting() {
        let a = array![[1e-3, 1.0], [1.0, 1.0]];
        let solver = GaussJordan::new().pivoting(PivotStrategy::MaxMagnitude);
        let r = solver.reduce(&a).unwrap();

        assert_abs_diff_eq!(r, Matrix::eye(2), epsilon = 1e-12);
    }

    #[test]
    fn test_rank_deficiency_full_rank() {
        let r = eliminate(&array![[3.0, 1.0], [1.0, 2.0]]).unwrap();
        assert_eq!(GaussJordan::new().rank_deficiency(&r), None);
    }

    #[test]
    fn test_invalid_tolerance() {
        std::panic::catch_unwind(|| {
            GaussJordan::new().pivot_tolerance(-1.0);
        })
        .expect_err("Should panic on negative tolerance");
    }
}
