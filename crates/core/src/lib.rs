//! Core traits and types for describing objectives to numerical minimizers.
//!
//! This crate defines the seam between an objective and the solver that
//! drives it:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output, with
//!   [`from_fn`] for closures
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`MinimizationProblem`] — adapts solver variables to model inputs and
//!   extracts a scalar objective from outputs
//! - [`DifferentiableProblem`] — an optional analytic gradient on top of a
//!   minimization problem
//! - [`evaluate`] and [`evaluate_with_gradient`] — run a model in the context
//!   of a problem, producing an [`Evaluation`]

mod evaluate;
mod model;
mod problems;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate, evaluate_with_gradient};
pub use model::{FnModel, Model, Snapshot, from_fn};
pub use problems::{DifferentiableProblem, MinimizationProblem};
