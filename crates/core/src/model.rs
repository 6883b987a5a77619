use std::marker::PhantomData;

/// A callable that maps an input to an output.
///
/// An objective is split in two halves: the model computes whatever the
/// objective is built from, and a [`MinimizationProblem`] reduces the
/// input/output pair to a scalar. For closed-form benchmark functions the
/// model output already is the objective value.
///
/// [`MinimizationProblem`]: crate::MinimizationProblem
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// A [`Model`] backed by a closure, created with [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnModel<F, I> {
    f: F,
    _input: PhantomData<fn(&I)>,
}

/// Wraps a fallible closure as a [`Model`].
///
/// Useful for objectives that are a plain function of their input and do not
/// warrant a dedicated type.
///
/// # Example
///
/// ```
/// use std::convert::Infallible;
///
/// use valley_core::{Model, from_fn};
///
/// let square = from_fn(|x: &f64| Ok::<_, Infallible>(x * x));
/// assert_eq!(square.call(&3.0), Ok(9.0));
/// ```
pub fn from_fn<F, I, O, E>(f: F) -> FnModel<F, I>
where
    F: Fn(&I) -> Result<O, E>,
{
    FnModel {
        f,
        _input: PhantomData,
    }
}

impl<F, I, O, E> Model for FnModel<F, I>
where
    F: Fn(&I) -> Result<O, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Input = I;
    type Output = O;
    type Error = E;

    fn call(&self, input: &I) -> Result<O, E> {
        (self.f)(input)
    }
}

/// The input a model was called with and the output it produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Creates a new snapshot from input and output values.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}
