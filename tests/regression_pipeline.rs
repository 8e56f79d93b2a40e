//! End-to-end checks: synthetic data through CSV round trips into the solver.

use approx::assert_abs_diff_eq;
use ndarray::array;
use rand::rngs::StdRng;
use rand::SeedableRng;

use olskit::datasets::diagonally_dominant;
use olskit::io::{read_matrix_from, read_vector_from, write_matrix_to, write_vector_to};
use olskit::matrix::{matrix_product, matrix_vector_product};
use olskit::metrics::{mean_absolute_error, mean_squared_error, sum_squared_error};
use olskit::{eliminate, invert, ols, Error, GaussJordan, LinearRegression, PivotStrategy, Vector};

#[test]
fn test_square_system_recovers_ones() {
    let mut rng = StdRng::seed_from_u64(2024);
    let (x, y) = diagonally_dominant(40, 40, &mut rng).unwrap();

    let x_hat = ols(&x, &y).unwrap();
    assert_eq!(x_hat.len(), 40);
    assert_abs_diff_eq!(x_hat, Vector::ones(40), epsilon = 1e-3);
}

#[test]
fn test_tall_system_through_csv() {
    let mut rng = StdRng::seed_from_u64(11);
    let (x, y) = diagonally_dominant(60, 12, &mut rng).unwrap();

    let mut matrix_csv = Vec::new();
    let mut vector_csv = Vec::new();
    write_matrix_to(&mut matrix_csv, &x).unwrap();
    write_vector_to(&mut vector_csv, &y).unwrap();

    let x_read = read_matrix_from(matrix_csv.as_slice()).unwrap();
    let y_read = read_vector_from(vector_csv.as_slice()).unwrap();
    assert_eq!(x_read, x);
    assert_eq!(y_read, y);

    let x_hat = ols(&x_read, &y_read).unwrap();
    assert_abs_diff_eq!(x_hat, Vector::ones(12), epsilon = 1e-3);

    let y_hat = matrix_vector_product(&x_read, &x_hat).unwrap();
    assert!(sum_squared_error(&y_read, &y_hat).unwrap() < 1e-6);
    assert!(mean_squared_error(&y_read, &y_hat).unwrap() < 1e-6);
    assert!(mean_absolute_error(&y_read, &y_hat).unwrap() < 1e-3);
}

#[test]
fn test_partial_pivoting_agrees() {
    let mut rng = StdRng::seed_from_u64(5);
    let (x, y) = diagonally_dominant(25, 10, &mut rng).unwrap();

    let mut model = LinearRegression::new()
        .fit_intercept(false)
        .solver(GaussJordan::new().pivoting(PivotStrategy::MaxMagnitude));
    model.fit(&x, &y).unwrap();

    let coefficients = model.coefficients.as_ref().unwrap();
    assert_abs_diff_eq!(*coefficients, Vector::ones(10), epsilon = 1e-3);
    assert!(model.diagnostics.unwrap().mse < 1e-6);
}

#[test]
fn test_inverse_round_trip() {
    let a = array![[1.0, 2.0], [3.0, 4.0]];
    let a_inv = invert(&a).unwrap();

    assert_abs_diff_eq!(a_inv, array![[-2.0, 1.0], [1.5, -0.5]], epsilon = 1e-4);
    assert_abs_diff_eq!(
        matrix_product(&a, &a_inv).unwrap(),
        ndarray::Array2::eye(2),
        epsilon = 1e-4
    );
}

#[test]
fn test_singular_inputs_are_reported() {
    let a = array![[2.0, 3.0, 4.0], [5.0, 6.0, 7.0], [8.0, 9.0, 10.0]];

    let r = eliminate(&a).unwrap();
    assert!(r.rows().into_iter().any(|row| row.iter().all(|v| v.abs() < 1e-9)));
    assert!(matches!(invert(&a), Err(Error::Singular { .. })));
    assert!(matches!(
        ols(&a, &array![1.0, 2.0, 3.0]),
        Err(Error::NotFullRank { .. })
    ));
}
