pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod datasets;
pub mod elimination;
pub mod error;
pub mod inversion;
pub mod io;
pub mod linear_model;
pub mod matrix;
pub mod metrics;
pub mod vector;

pub use elimination::{eliminate, GaussJordan, PivotStrategy};
pub use error::{Error, Result};
pub use inversion::invert;
pub use linear_model::{ols, FitDiagnostics, LinearRegression};

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;
