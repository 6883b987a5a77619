use log::trace;
use thiserror::Error;

use crate::{DifferentiableProblem, MinimizationProblem, Model, Snapshot};

/// An objective (and optionally its gradient) evaluated at a given `x`.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O, const N: usize> {
    pub x: [f64; N],

    pub objective: f64,

    /// The gradient at `x`, present when produced by [`evaluate_with_gradient`].
    pub gradient: Option<[f64; N]>,

    pub snapshot: Snapshot<I, O>,
}

impl<I, O, const N: usize> Evaluation<I, O, N> {
    /// Returns the Euclidean norm of the gradient, if one was computed.
    ///
    /// Gradient-based solvers typically stop once this drops below a tolerance.
    #[must_use]
    pub fn gradient_norm(&self) -> Option<f64> {
        self.gradient
            .map(|grad| grad.iter().map(|g| g * g).sum::<f64>().sqrt())
    }
}

/// Errors that can occur when evaluating a minimization problem.
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    /// The model call failed.
    #[error("model call failed")]
    Model(#[source] ME),

    /// Failed to construct input, or to compute the objective or gradient.
    #[error("problem error")]
    Problem(#[source] PE),
}

/// Type alias for the result of [`evaluate`] and [`evaluate_with_gradient`].
pub type EvaluateResult<M, P, const N: usize> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output, N>,
    EvalError<<M as Model>::Error, <P as MinimizationProblem<N>>::Error>,
>;

/// Evaluates the objective of a minimization problem at `x`.
///
/// Maps `x` to a model input, calls the model, and reduces the resulting
/// snapshot to the objective. The returned evaluation has no gradient.
///
/// # Errors
///
/// Returns an error if input mapping, model call, or objective computation fails.
pub fn evaluate<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x: [f64; N],
) -> EvaluateResult<M, P, N>
where
    M: Model,
    P: MinimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    let input = problem.input(&x).map_err(EvalError::Problem)?;
    let output = model.call(&input).map_err(EvalError::Model)?;
    let snapshot = Snapshot::new(input, output);

    let objective = problem
        .objective_from_snapshot(&snapshot)
        .map_err(EvalError::Problem)?;

    trace!("f({x:?}) = {objective}");

    Ok(Evaluation {
        x,
        objective,
        gradient: None,
        snapshot,
    })
}

/// Evaluates the objective and its analytic gradient at `x`.
///
/// This is what a gradient-based minimizer calls once per iterate: the
/// objective for line-search acceptance and the gradient for the next search
/// direction.
///
/// # Errors
///
/// Returns an error if [`evaluate`] fails or the gradient cannot be computed.
pub fn evaluate_with_gradient<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x: [f64; N],
) -> EvaluateResult<M, P, N>
where
    M: Model,
    P: DifferentiableProblem<N, Input = M::Input, Output = M::Output>,
{
    let mut eval = evaluate(model, problem, x)?;
    let gradient = problem.gradient(&x).map_err(EvalError::Problem)?;

    trace!("∇f({x:?}) = {gradient:?}");

    eval.gradient = Some(gradient);
    Ok(eval)
}
