//! Evaluates the Rosenbrock function and verifies its analytic gradient.
//!
//! # Usage
//!
//! ```text
//! cargo run --example gradient_check
//! cargo run --example gradient_check -- 1.3 0.7 0.8 1.9 1.2
//! RUST_LOG=debug cargo run --example gradient_check -- -1.2 1
//! ```
//!
//! Coordinates default to the classic starting point `(-1.2, 1)`.

use std::error::Error;

use valley_core::evaluate_with_gradient;
use valley_rosenbrock::{
    Rosenbrock,
    check::{self, Config},
    hessian,
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let coords: Vec<f64> = std::env::args()
        .skip(1)
        .map(|arg| arg.parse())
        .collect::<Result<_, _>>()?;
    let x = if coords.is_empty() {
        vec![-1.2, 1.0]
    } else {
        coords
    };

    println!("x        = {x:?}");
    println!("f(x)     = {}", valley_rosenbrock::evaluate(&x)?);
    println!("∇f(x)    = {:?}", valley_rosenbrock::gradient(&x)?);
    println!("∇²f(x)   =\n{}", hessian(&x)?);

    let check = check::check_gradient(&x, &Config::default())?;
    println!(
        "check    = {} (max abs error {:e})",
        if check.passed() { "passed" } else { "FAILED" },
        check.max_abs_error()
    );

    // The same objective through the solver-facing traits, for a fixed 2D point.
    let eval = evaluate_with_gradient(&Rosenbrock, &Rosenbrock, [-1.2, 1.0])?;
    println!(
        "problem  = f({:?}) = {}, ∇f = {:?}, |∇f| = {:?}",
        eval.x,
        eval.objective,
        eval.gradient,
        eval.gradient_norm()
    );

    Ok(())
}
