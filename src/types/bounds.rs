//! 1D interval bounds.

use std::fmt;

use crate::error::{MeshError, Result};

/// Closed interval `[min, max]` spanned by one mesh axis.
///
/// # Example
///
/// ```
/// use cartmesh::types::AxisBounds;
///
/// let bounds = AxisBounds::new(0.0, 2.0).unwrap();
/// assert_eq!(bounds.length(), 2.0);
/// assert!(AxisBounds::new(1.0, 1.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisBounds {
    min: f64,
    max: f64,
}

impl AxisBounds {
    /// Create bounds, requiring finite values with `min < max`.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(MeshError::invalid_config(format!(
                "bounds must be finite, got ({min}, {max})"
            )));
        }
        if min >= max {
            return Err(MeshError::invalid_config(format!(
                "lower bound ({min}) must be less than upper bound ({max})"
            )));
        }
        Ok(Self { min, max })
    }

    /// The unit interval [0, 1].
    pub fn unit() -> Self {
        Self { min: 0.0, max: 1.0 }
    }

    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Interval length (max - min).
    #[inline]
    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    /// Check whether `x` lies inside the interval (inclusive).
    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }
}

impl Default for AxisBounds {
    fn default() -> Self {
        Self::unit()
    }
}

impl fmt::Display for AxisBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

impl TryFrom<(f64, f64)> for AxisBounds {
    type Error = MeshError;

    fn try_from((min, max): (f64, f64)) -> Result<Self> {
        Self::new(min, max)
    }
}
