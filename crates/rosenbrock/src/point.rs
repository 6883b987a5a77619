use crate::Error;

/// The smallest number of coordinates the function is defined for.
pub const MIN_DIMENSION: usize = 2;

/// Checks that `x` has at least [`MIN_DIMENSION`] coordinates.
pub(crate) fn check_dimension(x: &[f64]) -> Result<(), Error> {
    if x.len() < MIN_DIMENSION {
        return Err(Error::InvalidInput { len: x.len() });
    }
    Ok(())
}

/// A candidate solution with at least [`MIN_DIMENSION`] coordinates.
///
/// The free functions in this crate accept any slice and validate its length
/// on every call. A `Point` performs that validation once, at construction,
/// and is the input type of the [`Rosenbrock`](crate::Rosenbrock) model.
///
/// # Example
///
/// ```
/// use valley_rosenbrock::{Error, Point};
///
/// let point = Point::new(vec![1.3, 0.7, 0.8]).unwrap();
/// assert_eq!(point.len(), 3);
///
/// assert_eq!(Point::new(vec![1.0]), Err(Error::InvalidInput { len: 1 }));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<f64>", into = "Vec<f64>")
)]
pub struct Point(Vec<f64>);

impl Point {
    /// Creates a point from its coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if fewer than two coordinates are given.
    pub fn new(coords: Vec<f64>) -> Result<Self, Error> {
        check_dimension(&coords)?;
        Ok(Self(coords))
    }

    /// Creates the all-ones point, the global minimizer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `dimension` is less than two.
    pub fn ones(dimension: usize) -> Result<Self, Error> {
        Self::new(vec![1.0; dimension])
    }

    /// Returns the coordinates as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Returns the number of coordinates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`, since a point has at least two coordinates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Consumes the point and returns its coordinates.
    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl AsRef<[f64]> for Point {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl TryFrom<Vec<f64>> for Point {
    type Error = Error;

    fn try_from(coords: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(coords)
    }
}

impl From<Point> for Vec<f64> {
    fn from(point: Point) -> Self {
        point.0
    }
}


#[cfg(all(test, feature = "serde-derive"))]
mod serde_tests {
    use super::*;

    #[test]
    fn serializes_as_coordinate_list() {
        let point = Point::new(vec![1.3, 0.7, 0.8]).unwrap();

        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(json, "[1.3,0.7,0.8]");

        let parsed: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, point);
    }

    #[test]
    fn deserialize_rejects_short_points() {
        for json in ["[]", "[1.0]"] {
            let err = serde_json::from_str::<Point>(json).unwrap_err().to_string();
            assert!(err.contains("at least 2 coordinates"), "{json}: {err}");
        }
    }
}
