use crate::error::{Error, Result};
use crate::Vector;

fn check_lengths(operation: &'static str, y_true: &Vector, y_pred: &Vector) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(Error::SizeMismatch {
            operation,
            left: y_true.len(),
            right: y_pred.len(),
        });
    }
    Ok(())
}

fn check_non_empty(operation: &'static str, y_true: &Vector) -> Result<()> {
    if y_true.is_empty() {
        return Err(Error::InvalidArgument(format!(
            "{} needs at least one observation",
            operation
        )));
    }
    Ok(())
}

/// Sum of squared residuals, `Σ(y - ŷ)²`.
pub fn sum_squared_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths("sum squared error", y_true, y_pred)?;

    let diff = y_true - y_pred;
    Ok(diff.mapv(|x| x * x).sum())
}

/// Mean of the squared residuals, `SSE / n`.
///
/// # Errors
///
/// Returns [`Error::SizeMismatch`] for vectors of different lengths and
/// [`Error::InvalidArgument`] when both are empty, since the mean of no
/// residuals is undefined. Use [`sum_squared_error`] for a total that is `0`
/// on empty input.
pub fn mean_squared_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths("mean squared error", y_true, y_pred)?;
    check_non_empty("mean squared error", y_true)?;

    let sse = sum_squared_error(y_true, y_pred)?;
    Ok(sse / y_true.len() as f64)
}

/// Mean of the absolute residuals, `Σ|y - ŷ| / n`.
///
/// # Errors
///
/// Returns [`Error::SizeMismatch`] for vectors of different lengths and
/// [`Error::InvalidArgument`] when both are empty.
pub fn mean_absolute_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths("mean absolute error", y_true, y_pred)?;
    check_non_empty("mean absolute error", y_true)?;

    let diff = y_true - y_pred;
    Ok(diff.mapv(|x| x.abs()).sum() / y_true.len() as f64)
}

/// Coefficient of determination. Empty input is an [`Error::InvalidArgument`].
pub fn r2_score(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths("r2 score", y_true, y_pred)?;
    check_non_empty("r2 score", y_true)?;

    let y_mean = y_true.sum() / y_true.len() as f64;
    let ss_res = sum_squared_error(y_true, y_pred)?;
    let ss_tot = y_true.mapv(|x| (x - y_mean) * (x - y_mean)).sum();

    if ss_tot == 0.0 {
        return Ok(1.0); // Perfect prediction when variance is zero
    }

    Ok(1.0 - ss_res / ss_tot)
}
