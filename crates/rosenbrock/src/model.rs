use valley_core::{DifferentiableProblem, MinimizationProblem, Model};

use crate::{Error, Point, evaluate, gradient};

/// The Rosenbrock function as a model and minimization problem.
///
/// As a [`Model`], it maps a [`Point`] to its objective value. As a
/// [`MinimizationProblem`], it maps solver variables directly to a point and
/// uses the model output as the objective, so a solver can drive it with
/// [`valley_core::evaluate`]. The analytic gradient is exposed through
/// [`DifferentiableProblem`], so [`valley_core::evaluate_with_gradient`]
/// returns both at once.
///
/// # Example
///
/// ```
/// use valley_core::evaluate;
/// use valley_rosenbrock::Rosenbrock;
///
/// let eval = evaluate(&Rosenbrock, &Rosenbrock, [1.0, 1.0, 1.0]).unwrap();
/// assert_eq!(eval.objective, 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rosenbrock;

impl Model for Rosenbrock {
    type Input = Point;
    type Output = f64;
    type Error = Error;

    fn call(&self, input: &Point) -> Result<f64, Self::Error> {
        evaluate(input.as_slice())
    }
}

impl<const N: usize> MinimizationProblem<N> for Rosenbrock {
    type Input = Point;
    type Output = f64;
    type Error = Error;

    fn input(&self, x: &[f64; N]) -> Result<Point, Self::Error> {
        Point::new(x.to_vec())
    }

    fn objective(&self, _input: &Point, output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}

impl<const N: usize> DifferentiableProblem<N> for Rosenbrock {
    fn gradient(&self, x: &[f64; N]) -> Result<[f64; N], Self::Error> {
        let grad = gradient(x)?;

        let mut out = [0.0; N];
        out.copy_from_slice(&grad);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use valley_core::{EvalError, evaluate as evaluate_problem, evaluate_with_gradient};

    #[test]
    fn model_call_matches_free_function() {
        let point = Point::new(vec![-1.2, 1.0]).unwrap();
        let output = Rosenbrock.call(&point).unwrap();

        assert_relative_eq!(output, evaluate(&[-1.2, 1.0]).unwrap());
    }

    #[test]
    fn evaluates_as_problem() {
        let eval = evaluate_problem(&Rosenbrock, &Rosenbrock, [0.0, 0.0]).unwrap();

        assert_relative_eq!(eval.objective, 1.0);
        assert_eq!(eval.snapshot.input.as_slice(), &[0.0, 0.0]);
        assert_relative_eq!(eval.snapshot.output, 1.0);
    }

    #[test]
    fn evaluates_objective_and_gradient_together() {
        let eval = evaluate_with_gradient(&Rosenbrock, &Rosenbrock, [-1.2, 1.0]).unwrap();

        assert_relative_eq!(eval.objective, 24.2, epsilon = 1e-12);
        let grad = eval.gradient.unwrap();
        assert_relative_eq!(grad[0], -215.6, epsilon = 1e-10);
        assert_relative_eq!(grad[1], -88.0, epsilon = 1e-10);

        let at_minimum = evaluate_with_gradient(&Rosenbrock, &Rosenbrock, [1.0; 5]).unwrap();
        assert_eq!(at_minimum.objective, 0.0);
        assert_eq!(at_minimum.gradient_norm(), Some(0.0));
    }

    #[test]
    fn one_variable_problem_is_invalid_input() {
        let err = evaluate_problem(&Rosenbrock, &Rosenbrock, [2.0]).unwrap_err();
        assert!(matches!(
            err,
            EvalError::Problem(Error::InvalidInput { len: 1 })
        ));
    }

    #[test]
    fn gradient_as_array() {
        let grad = DifferentiableProblem::<3>::gradient(&Rosenbrock, &[1.0, 1.0, 1.0]).unwrap();
        assert_eq!(grad, [0.0; 3]);

        let grad = DifferentiableProblem::<2>::gradient(&Rosenbrock, &[-1.2, 1.0]).unwrap();
        assert_relative_eq!(grad[0], -215.6, epsilon = 1e-10);
        assert_relative_eq!(grad[1], -88.0, epsilon = 1e-10);
    }

    #[test]
    fn gradient_of_empty_problem_is_invalid_input() {
        let err = DifferentiableProblem::<0>::gradient(&Rosenbrock, &[]).unwrap_err();
        assert_eq!(err, Error::InvalidInput { len: 0 });
    }
}
