//! Axis labels and fixed per-axis storage.

use std::fmt;

/// A cartesian axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Axes in construction order.
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    /// Position of this axis in per-dimension lists.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }

    /// Axis at position `index`, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Axis::X),
            1 => Some(Axis::Y),
            _ => None,
        }
    }

    /// Lowercase label.
    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One optional slot per axis.
///
/// The x slot is filled for every mesh; the y slot only for 2D meshes.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisSlots<T> {
    x: Option<T>,
    y: Option<T>,
}

impl<T> AxisSlots<T> {
    /// Empty slots.
    pub fn empty() -> Self {
        Self { x: None, y: None }
    }

    /// Store `value` for `axis`, returning the previous occupant.
    pub fn insert(&mut self, axis: Axis, value: T) -> Option<T> {
        self.slot_mut(axis).replace(value)
    }

    pub fn get(&self, axis: Axis) -> Option<&T> {
        match axis {
            Axis::X => self.x.as_ref(),
            Axis::Y => self.y.as_ref(),
        }
    }

    pub fn get_mut(&mut self, axis: Axis) -> Option<&mut T> {
        self.slot_mut(axis).as_mut()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.x.is_some() as usize + self.y.is_some() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Occupied slots in axis order.
    pub fn iter(&self) -> impl Iterator<Item = (Axis, &T)> {
        Axis::ALL
            .into_iter()
            .filter_map(move |axis| self.get(axis).map(|value| (axis, value)))
    }

    fn slot_mut(&mut self, axis: Axis) -> &mut Option<T> {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }
}

impl<T> Default for AxisSlots<T> {
    fn default() -> Self {
        Self::empty()
    }
}
