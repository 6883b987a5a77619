use crate::Snapshot;

/// Defines a minimization problem to be solved.
///
/// A minimization problem maps solver variables to a model input,
/// then computes an objective value from the model input and output.
/// Solvers search for the input that minimizes the objective.
///
/// The const generic `N` is the number of solver variables.
/// For example, `N = 1` represents a scalar minimization problem.
pub trait MinimizationProblem<const N: usize> {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Maps solver variables (`x`) into a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from `x`.
    fn input(&self, x: &[f64; N]) -> Result<Self::Input, Self::Error>;

    /// Computes an objective value from model input/output.
    ///
    /// Solvers search for the input that minimizes this objective.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective cannot be computed.
    fn objective(&self, input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error>;

    /// Computes the objective value directly from a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective cannot be computed.
    fn objective_from_snapshot(
        &self,
        snap: &Snapshot<Self::Input, Self::Output>,
    ) -> Result<f64, Self::Error> {
        self.objective(&snap.input, &snap.output)
    }
}

/// A minimization problem with an analytic gradient.
///
/// Gradient-based solvers use this in place of finite differences.
/// The gradient is taken with respect to the solver variables `x`, so each
/// entry of the returned array is the partial derivative of the objective
/// with respect to the matching entry of `x`.
pub trait DifferentiableProblem<const N: usize>: MinimizationProblem<N> {
    /// Computes the gradient of the objective at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the gradient cannot be computed.
    fn gradient(&self, x: &[f64; N]) -> Result<[f64; N], Self::Error>;
}
