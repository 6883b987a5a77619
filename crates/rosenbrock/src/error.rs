use thiserror::Error;

/// Errors returned by the Rosenbrock entry points.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The point has fewer than two coordinates.
    ///
    /// The function sums over adjacent coordinate pairs, so it is undefined
    /// below two dimensions.
    #[error("point must have at least 2 coordinates, got {len}")]
    InvalidInput { len: usize },

    /// A direction vector does not match the dimension of the point.
    #[error("direction has {found} coordinates, expected {expected}")]
    DimensionMismatch { expected: usize, found: usize },
}
