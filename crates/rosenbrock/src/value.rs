use crate::{Error, point::check_dimension};

/// Evaluates the Rosenbrock function at `x`.
///
/// The result is a sum of squares, so it is never negative for finite input.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `x` has fewer than two coordinates.
pub fn evaluate(x: &[f64]) -> Result<f64, Error> {
    check_dimension(x)?;

    Ok(x.windows(2)
        .map(|pair| {
            let (prev, next) = (pair[0], pair[1]);
            100.0 * (next - prev * prev).powi(2) + (1.0 - prev).powi(2)
        })
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn two_dimensional_values() {
        assert_relative_eq!(evaluate(&[1.0, 1.0]).unwrap(), 0.0);
        assert_relative_eq!(evaluate(&[0.0, 0.0]).unwrap(), 1.0);
        // 100·(1 − 1)² + (1 + 1)² = 4
        assert_relative_eq!(evaluate(&[-1.0, 1.0]).unwrap(), 4.0);
        // 100·(2 − 0)² + 1 = 401
        assert_relative_eq!(evaluate(&[0.0, 2.0]).unwrap(), 401.0);
    }

    #[test]
    fn classic_starting_point() {
        // (-1.2, 1) is the customary start for 2D benchmarks.
        assert_relative_eq!(evaluate(&[-1.2, 1.0]).unwrap(), 24.2, epsilon = 1e-12);
    }

    #[test]
    fn sums_adjacent_pairs() {
        let x = [0.5, -0.3, 2.0];
        let first = 100.0 * (-0.3_f64 - 0.25).powi(2) + 0.25;
        let second = 100.0 * (2.0_f64 - 0.09).powi(2) + 1.3_f64.powi(2);

        assert_relative_eq!(evaluate(&x).unwrap(), first + second, epsilon = 1e-12);
    }

    #[test]
    fn rejects_short_points() {
        assert_eq!(evaluate(&[]), Err(Error::InvalidInput { len: 0 }));
        assert_eq!(evaluate(&[1.0]), Err(Error::InvalidInput { len: 1 }));
    }

    #[test]
    fn propagates_nan() {
        assert!(evaluate(&[f64::NAN, 1.0]).unwrap().is_nan());
    }
}
