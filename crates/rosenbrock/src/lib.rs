//! The generalized Rosenbrock function and its analytic derivatives.
//!
//! For a point `x` with `N ≥ 2` coordinates,
//!
//! ```text
//! f(x) = Σ_{i=1}^{N-1} 100·(x_i − x_{i−1}²)² + (1 − x_{i−1})²
//! ```
//!
//! The function is non-negative, smooth, and has its global minimum `f = 0`
//! at `x = (1, 1, …, 1)`, at the bottom of a narrow curved valley. That valley
//! makes it a standard benchmark for unconstrained minimizers.
//!
//! # Entry points
//!
//! - [`evaluate`] — the scalar objective
//! - [`gradient`] — the analytic gradient
//! - [`hessian`] and [`hessian_product`] — second-order information
//! - [`check`] — verification of analytic gradients by central differences
//! - [`Rosenbrock`] — the function as a [`valley_core::Model`] and
//!   [`valley_core::DifferentiableProblem`] for use with solvers
//!
//! All entry points are pure. Each call reads only its input slice and
//! allocates only its output, so calls may run concurrently without
//! coordination.

pub mod check;

mod error;
mod gradient;
mod hessian;
mod model;
mod point;
mod value;


pub use error::Error;
pub use gradient::gradient;
pub use hessian::{hessian, hessian_product};
pub use model::Rosenbrock;
pub use point::{MIN_DIMENSION, Point};
pub use value::evaluate;
