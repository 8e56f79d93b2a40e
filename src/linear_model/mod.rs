//! Least-squares regression.
//!
//! - [`ols`]: the raw normal-equations estimator `x̂ = (XᵗX)⁻¹ Xᵗy`
//! - [`LinearRegression`]: fit/predict wrapper with an optional intercept
//!
//! # Examples
//!
//! ```rust
//! use olskit::{ols, LinearRegression};
//! use ndarray::array;
//!
//! let x = array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
//! let y = array![2.0, 3.0, 5.0];
//! let coefficients = ols(&x, &y).unwrap();
//! assert!((coefficients[0] - 2.0).abs() < 1e-10);
//!
//! let x = array![[1.0], [2.0], [3.0]];
//! let y = array![3.0, 5.0, 7.0];
//!
//! let mut model = LinearRegression::new();
//! model.fit(&x, &y).unwrap();
//! let predictions = model.predict(&x).unwrap();
//! assert!((predictions[2] - 7.0).abs() < 1e-9);
//! ```

mod linear_regression;

pub use linear_regression::{ols, ols_with, FitDiagnostics, LinearRegression};
