use crate::{Error, point::check_dimension};

/// Computes the analytic gradient of the Rosenbrock function at `x`.
///
/// The returned vector has one partial derivative per coordinate:
///
/// ```text
/// ∂f/∂x_0     = −400·x_0·(x_1 − x_0²) − 2·(1 − x_0)
/// ∂f/∂x_j     = 200·(x_j − x_{j−1}²) − 400·x_j·(x_{j+1} − x_j²) − 2·(1 − x_j)
/// ∂f/∂x_{N−1} = 200·(x_{N−1} − x_{N−2}²)
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `x` has fewer than two coordinates.
pub fn gradient(x: &[f64]) -> Result<Vec<f64>, Error> {
    check_dimension(x)?;

    let n = x.len();
    let mut grad = vec![0.0; n];

    grad[0] = -400.0 * x[0] * (x[1] - x[0] * x[0]) - 2.0 * (1.0 - x[0]);

    for j in 1..n - 1 {
        grad[j] = 200.0 * (x[j] - x[j - 1] * x[j - 1])
            - 400.0 * x[j] * (x[j + 1] - x[j] * x[j])
            - 2.0 * (1.0 - x[j]);
    }

    grad[n - 1] = 200.0 * (x[n - 1] - x[n - 2] * x[n - 2]);

    Ok(grad)
}
