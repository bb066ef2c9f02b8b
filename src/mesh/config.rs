//! Mesh configuration.
//!
//! [`MeshConfig`] mirrors the arguments of [`CartesianMesh::new`] so that an
//! outer layer (CLI, input deck) can fill it in and hand it over. With the
//! `serde` feature it derives `Serialize`/`Deserialize`; missing fields fall
//! back to the defaults below.
//!
//! | Field | Default |
//! |-------|---------|
//! | `dimensions` | 2 |
//! | `n_cells` | `[4, 4]` |
//! | `coordinates` | `[(0, 1), (0, 1)]` |
//! | `scheme` | `finite_volume` |

use super::cartesian::CartesianMesh;
use crate::error::Result;
use crate::types::MeshScheme;

/// Construction parameters for a [`CartesianMesh`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MeshConfig {
    /// Number of dimensions (1 or 2)
    pub dimensions: usize,
    /// Cells per axis
    pub n_cells: Vec<usize>,
    /// `(min, max)` per axis
    pub coordinates: Vec<(f64, f64)>,
    /// Discretization scheme
    pub scheme: MeshScheme,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            dimensions: 2,
            n_cells: vec![4, 4],
            coordinates: vec![(0.0, 1.0), (0.0, 1.0)],
            scheme: MeshScheme::CellCentered,
        }
    }
}

impl MeshConfig {
    /// 1D configuration on `[min, max]`.
    pub fn one_d(n_cells: usize, bounds: (f64, f64)) -> Self {
        Self {
            dimensions: 1,
            n_cells: vec![n_cells],
            coordinates: vec![bounds],
            ..Self::default()
        }
    }

    /// 2D configuration with `n_cells = [nx, ny]`.
    pub fn two_d(n_cells: [usize; 2], x_bounds: (f64, f64), y_bounds: (f64, f64)) -> Self {
        Self {
            dimensions: 2,
            n_cells: n_cells.to_vec(),
            coordinates: vec![x_bounds, y_bounds],
            ..Self::default()
        }
    }

    /// Set the scheme.
    pub fn with_scheme(mut self, scheme: MeshScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Validate and build the mesh.
    pub fn build(&self) -> Result<CartesianMesh> {
        CartesianMesh::new(
            self.dimensions,
            &self.n_cells,
            &self.coordinates,
            self.scheme,
        )
    }
}
