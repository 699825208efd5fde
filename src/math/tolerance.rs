use crate::error::{GeometryError, Result};

use super::TOLERANCE;

/// Comparison slack used by classification tests.
///
/// `linear` applies to lengths and coordinates (coincidence, tangency),
/// `angular` to angles in radians (collinearity). A zero tolerance means
/// exact floating-point equality, which is the [`Default`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Maximum difference at which two lengths compare equal.
    pub linear: f64,
    /// Maximum difference at which two angles compare equal.
    pub angular: f64,
}

impl Tolerance {
    /// Exact equality for every comparison.
    pub const EXACT: Self = Self {
        linear: 0.0,
        angular: 0.0,
    };

    /// The crate-wide [`TOLERANCE`] for both lengths and angles.
    pub const STANDARD: Self = Self {
        linear: TOLERANCE,
        angular: TOLERANCE,
    };

    /// Creates a tolerance from explicit linear and angular slack.
    ///
    /// # Errors
    ///
    /// Returns an error if either value is negative or not finite.
    pub fn new(linear: f64, angular: f64) -> Result<Self> {
        for (parameter, value) in [("linear", linear), ("angular", angular)] {
            if !value.is_finite() || value < 0.0 {
                return Err(GeometryError::ParameterOutOfRange {
                    parameter,
                    value,
                    min: 0.0,
                    max: f64::MAX,
                }
                .into());
            }
        }
        Ok(Self { linear, angular })
    }

    /// Returns whether two lengths are equal within `linear`.
    #[must_use]
    pub fn lengths_equal(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.linear
    }

    /// Returns whether two angles are equal within `angular`.
    #[must_use]
    pub fn angles_equal(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.angular
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::EXACT
    }
}
