use olskit::matrix::matrix_product;
use olskit::{invert, Matrix};
use ndarray::array;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Matrix Inversion Example ===\n");

    let a: Matrix = array![[1.0, 2.0], [3.0, 4.0]];
    println!("A:\n{}\n", a);

    let a_inv = invert(&a)?;
    println!("A^-1:\n{:.4}\n", a_inv);

    let p = matrix_product(&a, &a_inv)?;
    println!("A * A^-1:\n{:.4}", p);

    let singular = array![[2.0, 3.0, 4.0], [5.0, 6.0, 7.0], [8.0, 9.0, 10.0]];
    match invert(&singular) {
        Ok(_) => println!("\nUnexpectedly inverted a singular matrix"),
        Err(err) => println!("\nSingular input rejected: {}", err),
    }

    Ok(())
}
