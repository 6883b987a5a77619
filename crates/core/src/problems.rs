pub mod optimization;

pub use optimization::{DifferentiableProblem, MinimizationProblem};
