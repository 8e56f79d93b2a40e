use ndarray::s;

use crate::elimination::GaussJordan;
use crate::error::{Error, Result};
use crate::matrix::{matrix_product, matrix_vector_product, transpose, zeros};
use crate::metrics::{mean_absolute_error, mean_squared_error, sum_squared_error};
use crate::{Matrix, Vector};

/// Ordinary least squares through the normal equations, `x̂ = (XᵗX)⁻¹ Xᵗy`.
///
/// `x` is `m x n` (one observation per row) and `y` holds the `m` targets.
/// Returns the `n` coefficients.
///
/// # Errors
///
/// - [`Error::SizeMismatch`] if `x` and `y` disagree on the number of observations.
/// - [`Error::NotFullRank`] if `x` does not have full column rank.
pub fn ols(x: &Matrix, y: &Vector) -> Result<Vector> {
    ols_with(&GaussJordan::default(), x, y)
}

/// [`ols`] with an explicitly configured elimination solver.
pub fn ols_with(solver: &GaussJordan, x: &Matrix, y: &Vector) -> Result<Vector> {
    if x.nrows() != y.len() {
        return Err(Error::SizeMismatch {
            operation: "ols",
            left: x.nrows(),
            right: y.len(),
        });
    }

    let reduced = solver.reduce(x)?;
    if let Some(column) = solver.rank_deficiency(&reduced) {
        log::warn!("design matrix does not have full column rank (column {})", column);
        return Err(Error::NotFullRank { column });
    }

    log::debug!("Performing OLS on a {}x{} design matrix", x.nrows(), x.ncols());

    let xt = transpose(x)?;
    let xtx = matrix_product(&xt, x)?;
    let xtx_inv = solver.invert(&xtx).map_err(|err| match err {
        Error::Singular { column } => Error::NotFullRank { column },
        Error::NotSquare { .. } => Error::NotFullRank { column: 0 },
        other => other,
    })?;
    let xty = matrix_vector_product(&xt, y)?;
    let x_hat = matrix_vector_product(&xtx_inv, &xty)?;

    log::debug!("OLS done");
    Ok(x_hat)
}

/// Error metrics of a fitted model on its training data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitDiagnostics {
    pub sse: f64,
    pub mse: f64,
    pub mae: f64,
}

#[derive(Clone, Debug)]
pub struct LinearRegression {
    pub coefficients: Option<Vector>,
    pub intercept: Option<f64>,
    pub diagnostics: Option<FitDiagnostics>,
    fit_intercept: bool,
    solver: GaussJordan,
}

impl LinearRegression {
    pub fn new() -> Self {
        Self {
            coefficients: None,
            intercept: None,
            diagnostics: None,
            fit_intercept: true,
            solver: GaussJordan::default(),
        }
    }

    pub fn fit_intercept(mut self, fit_intercept: bool) -> Self {
        self.fit_intercept = fit_intercept;
        self
    }

    pub fn solver(mut self, solver: GaussJordan) -> Self {
        self.solver = solver;
        self
    }

    pub fn fit(&mut self, x: &Matrix, y: &Vector) -> Result<()> {
        if x.nrows() != y.len() {
            return Err(Error::SizeMismatch {
                operation: "fit",
                left: x.nrows(),
                right: y.len(),
            });
        }

        let (coeffs, intercept) = if self.fit_intercept {
            let design = with_intercept_column(x)?;
            let solution = ols_with(&self.solver, &design, y)?;
            (solution.slice(s![1..]).to_owned(), solution[0])
        } else {
            (ols_with(&self.solver, x, y)?, 0.0)
        };

        self.coefficients = Some(coeffs);
        self.intercept = Some(intercept);

        let y_pred = self.predict(x)?;
        self.diagnostics = Some(FitDiagnostics {
            sse: sum_squared_error(y, &y_pred)?,
            mse: mean_squared_error(y, &y_pred)?,
            mae: mean_absolute_error(y, &y_pred)?,
        });
        Ok(())
    }

    pub fn predict(&self, x: &Matrix) -> Result<Vector> {
        let coeffs = self.coefficients.as_ref().ok_or_else(|| {
            Error::InvalidArgument("Model not fitted. Call fit() first.".to_string())
        })?;
        let intercept = self.intercept.unwrap_or(0.0);

        if x.ncols() != coeffs.len() {
            return Err(Error::SizeMismatch {
                operation: "predict",
                left: x.ncols(),
                right: coeffs.len(),
            });
        }

        let predictions = matrix_vector_product(x, coeffs)? + intercept;
        Ok(predictions)
    }

    pub fn score(&self, x: &Matrix, y: &Vector) -> Result<f64> {
        let y_pred = self.predict(x)?;
        crate::metrics::r2_score(y, &y_pred)
    }
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new()
    }
}

/// Prepends a column of ones to `x`.
fn with_intercept_column(x: &Matrix) -> Result<Matrix> {
    let mut design = zeros(x.nrows(), x.ncols() + 1)?;
    design.column_mut(0).fill(1.0);
    design.slice_mut(s![.., 1..]).assign(x);
    Ok(design)
}
