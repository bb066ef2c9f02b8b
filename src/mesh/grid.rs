//! Uniform 1D grid along one mesh axis.
//!
//! An interval [min, max] is split into `n_cells` evenly spaced points.
//! Where the points sit depends on the family:
//!
//! ```text
//! cell-centered (n = 4):   |  x  |  x  |  x  |  x  |      w = L / n
//! node-centered (n = 4):   x-------x-------x-------x      w = L / (n - 1)
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{MeshError, Result};
use crate::types::{AxisBounds, MeshScheme};

/// Placement of grid points within the interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GridFamily {
    /// Cell midpoints, inset half a width from the bounds.
    CellCentered,
    /// Nodes on both bounds and evenly in between.
    NodeCentered,
}

impl From<MeshScheme> for GridFamily {
    fn from(scheme: MeshScheme) -> Self {
        match scheme {
            MeshScheme::CellCentered => GridFamily::CellCentered,
            MeshScheme::NodeBased => GridFamily::NodeCentered,
        }
    }
}

impl FromStr for GridFamily {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cell_centered" | "cell-centered" | "finite_volume" => Ok(GridFamily::CellCentered),
            "node_centered" | "node-centered" | "finite_difference" => {
                Ok(GridFamily::NodeCentered)
            }
            other => Err(MeshError::invalid_config(format!(
                "grid family not supported: {other}"
            ))),
        }
    }
}

impl fmt::Display for GridFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridFamily::CellCentered => f.write_str("cell-centered"),
            GridFamily::NodeCentered => f.write_str("node-centered"),
        }
    }
}

/// Uniform grid on one axis. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisGrid {
    n_cells: usize,
    bounds: AxisBounds,
    family: GridFamily,
    cell_width: f64,
    cell_coordinates: Vec<f64>,
}

impl AxisGrid {
    /// Build a grid of `n_cells` points on `bounds = (min, max)`.
    ///
    /// Fails with `InvalidConfiguration` for zero cells, non-increasing
    /// bounds, or a node-centered grid with fewer than two nodes.
    ///
    /// # Example
    ///
    /// ```
    /// use cartmesh::mesh::{AxisGrid, GridFamily};
    ///
    /// let grid = AxisGrid::new(4, (0.0, 1.0), GridFamily::CellCentered).unwrap();
    /// assert_eq!(grid.cell_width(), 0.25);
    /// assert_eq!(grid.cell_coordinates(), &[0.125, 0.375, 0.625, 0.875]);
    /// ```
    pub fn new(n_cells: usize, bounds: (f64, f64), family: GridFamily) -> Result<Self> {
        if n_cells < 1 {
            return Err(MeshError::invalid_config("n_cells must be at least 1"));
        }
        let bounds = AxisBounds::try_from(bounds)?;
        let (min, max) = (bounds.min(), bounds.max());

        let (cell_width, cell_coordinates) = match family {
            GridFamily::CellCentered => {
                let w = bounds.length() / n_cells as f64;
                let coords = (0..n_cells)
                    .map(|i| min + w * (i as f64 + 0.5))
                    .collect();
                (w, coords)
            }
            GridFamily::NodeCentered => {
                if n_cells < 2 {
                    return Err(MeshError::invalid_config(
                        "node-centered grid needs at least 2 nodes",
                    ));
                }
                let w = bounds.length() / (n_cells - 1) as f64;
                let mut coords: Vec<f64> = (0..n_cells).map(|i| min + w * i as f64).collect();
                // Pin the last node to the bound against rounding drift
                coords[n_cells - 1] = max;
                (w, coords)
            }
        };

        Ok(Self {
            n_cells,
            bounds,
            family,
            cell_width,
            cell_coordinates,
        })
    }

    #[inline]
    pub fn n_cells(&self) -> usize {
        self.n_cells
    }

    #[inline]
    pub fn bounds(&self) -> AxisBounds {
        self.bounds
    }

    #[inline]
    pub fn family(&self) -> GridFamily {
        self.family
    }

    /// Spacing between neighbouring points.
    #[inline]
    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    #[inline]
    pub fn cell_coordinates(&self) -> &[f64] {
        &self.cell_coordinates
    }

    /// Total interval length.
    pub fn length(&self) -> f64 {
        self.bounds.length()
    }
}
