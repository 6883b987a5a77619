use thiserror::Error;

/// Configuration for finite-difference gradient checks.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawConfig")
)]
pub struct Config {
    step: f64,
    rel_tol: f64,
    abs_tol: f64,
}

/// Unvalidated fields, deserialized before going through [`Config::new`].
#[cfg(feature = "serde-derive")]
#[derive(serde::Deserialize)]
struct RawConfig {
    step: f64,
    rel_tol: f64,
    abs_tol: f64,
}

#[cfg(feature = "serde-derive")]
impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Self::new(raw.step, raw.rel_tol, raw.abs_tol)
    }
}

/// Errors that can occur when validating a gradient check config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("step must be finite and positive")]
    Step,

    #[error("rel_tol must be finite and non-negative")]
    RelTol,

    #[error("abs_tol must be finite and non-negative")]
    AbsTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step: 1e-6,
            rel_tol: 1e-4,
            abs_tol: 1e-6,
        }
    }
}

impl Config {
    /// Creates a new config with a validated step and tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if the step is not positive, or if either tolerance
    /// is negative. All values must be finite.
    pub fn new(step: f64, rel_tol: f64, abs_tol: f64) -> Result<Self, ConfigError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::Step);
        }
        if !rel_tol.is_finite() || rel_tol < 0.0 {
            return Err(ConfigError::RelTol);
        }
        if !abs_tol.is_finite() || abs_tol < 0.0 {
            return Err(ConfigError::AbsTol);
        }

        Ok(Self {
            step,
            rel_tol,
            abs_tol,
        })
    }

    /// Returns the central-difference step size.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the relative tolerance for gradient agreement.
    #[must_use]
    pub fn rel_tol(&self) -> f64 {
        self.rel_tol
    }

    /// Returns the absolute tolerance for gradient agreement.
    #[must_use]
    pub fn abs_tol(&self) -> f64 {
        self.abs_tol
    }

    /// Returns `true` if `analytic` and `numeric` agree within tolerance.
    ///
    /// Values agree when `|a − n| ≤ abs_tol + rel_tol·max(|a|, |n|)`.
    #[must_use]
    pub fn agrees(&self, analytic: f64, numeric: f64) -> bool {
        let scale = analytic.abs().max(numeric.abs());
        (analytic - numeric).abs() <= self.abs_tol + self.rel_tol * scale
    }
}
