use ndarray::Array2;

use crate::{Error, point::check_dimension};

/// Computes the analytic Hessian of the Rosenbrock function at `x`.
///
/// The Hessian is symmetric and tridiagonal. Only the diagonal and the
/// entries directly beside it are non-zero:
///
/// ```text
/// H[0][0]     = 1200·x_0² − 400·x_1 + 2
/// H[j][j]     = 202 + 1200·x_j² − 400·x_{j+1}
/// H[N−1][N−1] = 200
/// H[j][j+1]   = H[j+1][j] = −400·x_j
/// ```
///
/// Use [`hessian_product`] when only `H·p` is needed, since it avoids the
/// dense `N×N` allocation.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `x` has fewer than two coordinates.
pub fn hessian(x: &[f64]) -> Result<Array2<f64>, Error> {
    check_dimension(x)?;

    let n = x.len();
    let mut hess = Array2::zeros((n, n));

    for j in 0..n - 1 {
        let coupling = -400.0 * x[j];
        hess[[j, j + 1]] = coupling;
        hess[[j + 1, j]] = coupling;
    }

    hess[[0, 0]] = 1200.0 * x[0] * x[0] - 400.0 * x[1] + 2.0;
    for j in 1..n - 1 {
        hess[[j, j]] = 202.0 + 1200.0 * x[j] * x[j] - 400.0 * x[j + 1];
    }
    hess[[n - 1, n - 1]] = 200.0;

    Ok(hess)
}

/// Computes the product of the Hessian at `x` with a direction `p`.
///
/// Equivalent to `hessian(x)?.dot(p)` but computed in linear time and
/// memory by exploiting the tridiagonal structure.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `x` has fewer than two coordinates, or
/// [`Error::DimensionMismatch`] if `p` and `x` differ in length.
pub fn hessian_product(x: &[f64], p: &[f64]) -> Result<Vec<f64>, Error> {
    check_dimension(x)?;

    let n = x.len();
    if p.len() != n {
        return Err(Error::DimensionMismatch {
            expected: n,
            found: p.len(),
        });
    }

    let mut product = vec![0.0; n];

    product[0] = (1200.0 * x[0] * x[0] - 400.0 * x[1] + 2.0) * p[0] - 400.0 * x[0] * p[1];

    for j in 1..n - 1 {
        product[j] = -400.0 * x[j - 1] * p[j - 1]
            + (202.0 + 1200.0 * x[j] * x[j] - 400.0 * x[j + 1]) * p[j]
            - 400.0 * x[j] * p[j + 1];
    }

    product[n - 1] = -400.0 * x[n - 2] * p[n - 2] + 200.0 * p[n - 1];

    Ok(product)
}
