//! Boundary sides and the index selector for 1D arrays.
//!
//! `Left`/`Right` close the x axis, `Top`/`Bottom` close the y axis.
//! `Top` is the low-index end of the y axis (row 0), matching the row-major
//! layout where y grows with the row index.

use std::fmt;
use std::str::FromStr;

use super::axis::Axis;
use crate::error::{MeshError, Result};

/// A named domain boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Side {
    /// x = x_min
    Left,
    /// x = x_max
    Right,
    /// y = y_min
    Top,
    /// y = y_max
    Bottom,
}

impl Side {
    /// All sides, x axis first.
    pub const ALL: [Side; 4] = [Side::Left, Side::Right, Side::Top, Side::Bottom];

    /// The axis this side closes.
    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Side::Left | Side::Right => Axis::X,
            Side::Top | Side::Bottom => Axis::Y,
        }
    }

    /// True for the low-index end of its axis.
    #[inline]
    pub fn is_low_end(self) -> bool {
        matches!(self, Side::Left | Side::Top)
    }

    /// Lowercase label.
    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
            Side::Top => "top",
            Side::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Side {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            "top" => Ok(Side::Top),
            "bottom" => Ok(Side::Bottom),
            _ => Err(MeshError::invalid_side(
                s,
                "expected one of left, right, top, bottom",
            )),
        }
    }
}

/// Row/column index of the boundary entry for `side` in an array of length `n`.
///
/// `n` must be at least 1.
#[inline]
pub fn boundary_index(side: Side, n: usize) -> usize {
    debug_assert!(n > 0, "boundary_index on an empty array");
    if side.is_low_end() { 0 } else { n - 1 }
}

/// Index of the interior entry adjacent to the boundary of `side`.
///
/// Returns `None` when `n < 2` (a single cell has no interior neighbour).
#[inline]
pub fn first_interior_index(side: Side, n: usize) -> Option<usize> {
    if n < 2 {
        return None;
    }
    Some(if side.is_low_end() { 1 } else { n - 2 })
}
