use olskit::datasets::diagonally_dominant;
use olskit::io::{read_matrix, read_vector, write_matrix, write_vector};
use olskit::metrics::{mean_absolute_error, mean_squared_error, sum_squared_error};
use olskit::LinearRegression;
use rand::rngs::StdRng;
use rand::SeedableRng;

const MATRIX_FILE_NAME: &str = "full_rank_matrix.csv";
const VECTOR_FILE_NAME: &str = "target_vector.csv";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Usage: ols_demo [rows] [cols] [seed]
    let mut args = std::env::args().skip(1);
    let rows = args.next().map(|s| s.parse::<usize>()).transpose()?.unwrap_or(200);
    let cols = args.next().map(|s| s.parse::<usize>()).transpose()?.unwrap_or(50);
    let seed = args.next().map(|s| s.parse::<u64>()).transpose()?.unwrap_or(42);

    println!("=== Ordinary Least Squares Example ===\n");
    println!("Generating a {} by {} matrix (seed {})...", rows, cols, seed);

    let mut rng = StdRng::seed_from_u64(seed);
    let (x, y) = diagonally_dominant(rows, cols, &mut rng)?;

    let dir = std::env::temp_dir();
    let matrix_path = dir.join(MATRIX_FILE_NAME);
    let vector_path = dir.join(VECTOR_FILE_NAME);
    write_matrix(&matrix_path, &x)?;
    write_vector(&vector_path, &y)?;
    println!("Wrote {} and {}", matrix_path.display(), vector_path.display());

    let x = read_matrix(&matrix_path)?;
    let y = read_vector(&vector_path)?;

    // Targets are row sums, so every coefficient should come out as 1.
    let mut model = LinearRegression::new().fit_intercept(false);
    model.fit(&x, &y)?;
    let predictions = model.predict(&x)?;

    let coefficients = model.coefficients.as_ref().ok_or("model was not fitted")?;
    let worst = coefficients
        .iter()
        .map(|c| (c - 1.0).abs())
        .fold(0.0_f64, f64::max);

    println!("\nResults:");
    println!("  Largest |coefficient - 1|: {:.3e}", worst);
    println!("  SSE: {:.3e}", sum_squared_error(&y, &predictions)?);
    println!("  MSE: {:.3e}", mean_squared_error(&y, &predictions)?);
    println!("  MAE: {:.3e}", mean_absolute_error(&y, &predictions)?);
    println!("  R² score: {:.6}", model.score(&x, &y)?);

    Ok(())
}
