//! Verification of analytic gradients against central finite differences.
//!
//! A hand-derived gradient is easy to get subtly wrong. [`check_gradient`]
//! compares [`gradient`](crate::gradient) against the central difference
//!
//! ```text
//! ∂f/∂x_i ≈ (f(x + h·e_i) − f(x − h·e_i)) / 2h
//! ```
//!
//! of [`evaluate`](crate::evaluate) and reports every coordinate where the two
//! disagree by more than the configured tolerance. [`central_difference`] is
//! exposed on its own so the same check can be applied to other objectives.

mod config;

use log::debug;

use crate::{Error, evaluate, gradient};

pub use config::{Config, ConfigError};

/// A coordinate where the analytic and numeric gradients disagree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Discrepancy {
    /// The coordinate index.
    pub index: usize,

    /// The analytic partial derivative.
    pub analytic: f64,

    /// The central-difference estimate.
    pub numeric: f64,
}

impl Discrepancy {
    /// Returns the absolute difference between the two estimates.
    #[must_use]
    pub fn abs_error(&self) -> f64 {
        (self.analytic - self.numeric).abs()
    }
}

/// The outcome of comparing an analytic gradient with central differences.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientCheck {
    /// The analytic gradient.
    pub analytic: Vec<f64>,

    /// The central-difference gradient.
    pub numeric: Vec<f64>,

    /// Coordinates outside tolerance, in index order.
    pub discrepancies: Vec<Discrepancy>,
}

impl GradientCheck {
    /// Returns `true` if every coordinate agrees within tolerance.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.discrepancies.is_empty()
    }

    /// Returns the largest absolute difference over all coordinates.
    #[must_use]
    pub fn max_abs_error(&self) -> f64 {
        self.analytic
            .iter()
            .zip(&self.numeric)
            .map(|(a, n)| (a - n).abs())
            .fold(0.0, f64::max)
    }
}

/// Approximates the gradient of `f` at `x` by central differences.
///
/// Each coordinate is perturbed by `±step` in turn while the others are held
/// fixed, so `f` is called `2·x.len()` times.
///
/// # Errors
///
/// Returns the first error produced by `f`.
pub fn central_difference<F, E>(f: F, x: &[f64], step: f64) -> Result<Vec<f64>, E>
where
    F: Fn(&[f64]) -> Result<f64, E>,
{
    let mut shifted = x.to_vec();
    let mut grad = Vec::with_capacity(x.len());

    for (i, &xi) in x.iter().enumerate() {
        shifted[i] = xi + step;
        let f_plus = f(&shifted)?;

        shifted[i] = xi - step;
        let f_minus = f(&shifted)?;

        shifted[i] = xi;
        grad.push((f_plus - f_minus) / (2.0 * step));
    }

    Ok(grad)
}

/// Compares the analytic Rosenbrock gradient at `x` with central differences.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `x` has fewer than two coordinates.
pub fn check_gradient(x: &[f64], config: &Config) -> Result<GradientCheck, Error> {
    let analytic = gradient(x)?;
    let numeric = central_difference(evaluate, x, config.step())?;

    let discrepancies: Vec<_> = analytic
        .iter()
        .zip(&numeric)
        .enumerate()
        .filter(|&(_, (&a, &n))| !config.agrees(a, n))
        .map(|(index, (&analytic, &numeric))| Discrepancy {
            index,
            analytic,
            numeric,
        })
        .collect();

    for d in &discrepancies {
        debug!(
            "gradient mismatch at x[{}]: analytic = {}, numeric = {}",
            d.index, d.analytic, d.numeric
        );
    }

    Ok(GradientCheck {
        analytic,
        numeric,
        discrepancies,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    #[test]
    fn central_difference_of_polynomial() {
        // f(x, y) = x³ + 2xy, ∇f = (3x² + 2y, 2x)
        let f = |x: &[f64]| Ok::<_, Infallible>(x[0].powi(3) + 2.0 * x[0] * x[1]);

        let grad = central_difference(f, &[2.0, -1.0], 1e-5).unwrap();

        assert_relative_eq!(grad[0], 10.0, epsilon = 1e-6);
        assert_relative_eq!(grad[1], 4.0, epsilon = 1e-6);
    }

    #[test]
    fn central_difference_propagates_errors() {
        let f = |x: &[f64]| {
            if x[1] > 1.0 {
                Err("out of domain")
            } else {
                Ok(x[0] + x[1])
            }
        };

        assert_eq!(
            central_difference(f, &[0.0, 1.0], 0.1),
            Err("out of domain")
        );
    }

    #[test]
    fn analytic_gradient_passes_check() {
        let x = [1.3, 0.7, 0.8, 1.9, 1.2];
        let check = check_gradient(&x, &Config::default()).unwrap();

        assert!(check.passed(), "discrepancies: {:?}", check.discrepancies);
        assert_eq!(check.analytic.len(), x.len());
        assert_eq!(check.numeric.len(), x.len());
    }

    #[test]
    fn reports_discrepancies_beyond_tolerance() {
        // A step this large leaves truncation error well above zero tolerance.
        let config = Config::new(0.1, 0.0, 0.0).unwrap();
        let check = check_gradient(&[-1.2, 1.0], &config).unwrap();

        assert!(!check.passed());
        assert!(check.max_abs_error() > 0.0);

        let first = check.discrepancies[0];
        assert_eq!(first.index, 0);
        assert_relative_eq!(first.abs_error(), (first.analytic - first.numeric).abs());
    }

    #[test]
    fn rejects_short_points() {
        assert_eq!(
            check_gradient(&[2.0], &Config::default()),
            Err(Error::InvalidInput { len: 1 })
        );
    }
}
