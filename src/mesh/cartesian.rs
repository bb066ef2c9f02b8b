//! Cartesian mesh in one or two dimensions.
//!
//! Owns one [`AxisMesh`] per active axis and the Laplacian assembled from
//! them. Unknowns are flattened row-major with x fastest:
//!
//! ```text
//!          ix = 0    1    2
//! iy = 0 [  0    1    2 ]   <- top
//! iy = 1 [  3    4    5 ]
//! iy = 2 [  6    7    8 ]   <- bottom
//!          ^left        ^right
//! ```
//!
//! Every boundary mutation rebuilds the Laplacian from scratch, so it is
//! always consistent with the per-axis stencils.

use faer::Mat;
use log::{debug, trace};

use super::axis_mesh::AxisMesh;
use crate::error::{MeshError, Result};
use crate::operators::BoundaryVector;
use crate::types::{Axis, AxisSlots, MeshScheme, Side};

/// Largest supported dimensionality.
pub const MAX_DIMENSIONS: usize = 2;

/// A 1D or 2D structured cartesian mesh with its Laplacian.
///
/// # Example
///
/// ```
/// use cartmesh::{CartesianMesh, MeshScheme, Side};
///
/// let mut mesh = CartesianMesh::new(1, &[4], &[(0.0, 1.0)], MeshScheme::CellCentered).unwrap();
/// mesh.set_dirichlet_boundary(Side::Left, 30.0).unwrap();
///
/// // S / dx² with dx = 0.25
/// assert_eq!(mesh.laplacian()[(0, 0)], -3.0 * 16.0);
/// assert_eq!(mesh.laplacian()[(0, 1)], 16.0);
/// ```
#[derive(Clone, Debug)]
pub struct CartesianMesh {
    dimensions: usize,
    scheme: MeshScheme,
    axes: AxisSlots<AxisMesh>,
    laplacian: Mat<f64>,
}

impl CartesianMesh {
    /// Build a mesh.
    ///
    /// * `dimensions` - 1 or 2
    /// * `n_cells` - cell count per axis, `dimensions` entries
    /// * `coordinates` - `(min, max)` per axis, `dimensions` entries
    /// * `scheme` - cell-centered or node-based closures
    pub fn new(
        dimensions: usize,
        n_cells: &[usize],
        coordinates: &[(f64, f64)],
        scheme: MeshScheme,
    ) -> Result<Self> {
        validate_shape(dimensions, n_cells, coordinates)?;

        let mut axes = AxisSlots::empty();
        for (index, (&n, &bounds)) in n_cells.iter().zip(coordinates).enumerate() {
            let axis = Axis::from_index(index).ok_or_else(|| {
                MeshError::invalid_config(format!("no axis at position {index}"))
            })?;
            axes.insert(axis, AxisMesh::new(axis, n, bounds, scheme)?);
        }

        let mut mesh = Self {
            dimensions,
            scheme,
            axes,
            laplacian: Mat::zeros(0, 0),
        };
        mesh.recompute_laplacian();

        debug!(
            "built {}D {} mesh with cells {:?} on {:?}",
            dimensions, scheme, n_cells, coordinates
        );
        Ok(mesh)
    }

    /// Build a mesh from a scheme label such as `"finite_volume"`.
    pub fn from_labels(
        dimensions: usize,
        n_cells: &[usize],
        coordinates: &[(f64, f64)],
        scheme: &str,
    ) -> Result<Self> {
        validate_shape(dimensions, n_cells, coordinates)?;
        let scheme: MeshScheme = scheme.parse()?;
        Self::new(dimensions, n_cells, coordinates, scheme)
    }

    #[inline]
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    #[inline]
    pub fn scheme(&self) -> MeshScheme {
        self.scheme
    }

    /// Cell counts per active axis.
    pub fn n_cells(&self) -> Vec<usize> {
        self.axes.iter().map(|(_, a)| a.n_cells()).collect()
    }

    /// Product of the per-axis cell counts (Laplacian size).
    pub fn total_cells(&self) -> usize {
        self.axes.iter().map(|(_, a)| a.n_cells()).product()
    }

    /// Per-axis discretization, `None` for an inactive axis.
    pub fn axis(&self, axis: Axis) -> Option<&AxisMesh> {
        self.axes.get(axis)
    }

    /// Active axes in order.
    pub fn axes(&self) -> impl Iterator<Item = &AxisMesh> {
        self.axes.iter().map(|(_, a)| a)
    }

    pub fn cell_width(&self, axis: Axis) -> Option<f64> {
        self.axes.get(axis).map(AxisMesh::cell_width)
    }

    pub fn cell_coordinates(&self, axis: Axis) -> Option<&[f64]> {
        self.axes.get(axis).map(AxisMesh::cell_coordinates)
    }

    pub fn boundary_vector(&self, axis: Axis) -> Option<&BoundaryVector> {
        self.axes.get(axis).map(AxisMesh::boundary_vector)
    }

    /// Current Laplacian, `total_cells × total_cells`.
    #[inline]
    pub fn laplacian(&self) -> &Mat<f64> {
        &self.laplacian
    }

    /// Flattened index of cell `(ix, iy)`; `iy` is ignored in 1D.
    pub fn linear_index(&self, ix: usize, iy: usize) -> usize {
        match self.dimensions {
            1 => ix,
            _ => iy * self.axes.get(Axis::X).map_or(0, AxisMesh::n_cells) + ix,
        }
    }

    /// Impose a Dirichlet value on `side` and rebuild the Laplacian.
    pub fn set_dirichlet_boundary(&mut self, side: Side, value: f64) -> Result<()> {
        self.axis_for_mut(side)?.set_dirichlet(side, value)?;
        debug!("dirichlet {} = {} on {} mesh", side, value, self.scheme);
        self.recompute_laplacian();
        Ok(())
    }

    /// Impose a Neumann flux on `side` (positive into the domain) and
    /// rebuild the Laplacian.
    pub fn set_neumann_boundary(&mut self, side: Side, flux: f64) -> Result<()> {
        self.axis_for_mut(side)?.set_neumann(side, flux)?;
        debug!("neumann {} flux = {} on {} mesh", side, flux, self.scheme);
        self.recompute_laplacian();
        Ok(())
    }

    /// Rebuild the Laplacian from the current axis stencils.
    ///
    /// 1D: `S_x / dx²`. 2D: `kron(I_y, S_x / dx²) + kron(S_y / dy², I_x)`.
    pub fn recompute_laplacian(&mut self) {
        let dxx = self.axes.get(Axis::X).map(AxisMesh::second_derivative);
        let dyy = self.axes.get(Axis::Y).map(AxisMesh::second_derivative);

        self.laplacian = match (dxx, dyy) {
            (Some(dxx), Some(dyy)) => assemble_kronecker_sum(&dxx, &dyy),
            (Some(dxx), None) => dxx,
            _ => Mat::zeros(0, 0),
        };

        trace!(
            "laplacian rebuilt: {}x{}",
            self.laplacian.nrows(),
            self.laplacian.ncols()
        );
    }

    fn axis_for_mut(&mut self, side: Side) -> Result<&mut AxisMesh> {
        let dimensions = self.dimensions;
        self.axes.get_mut(side.axis()).ok_or_else(|| {
            MeshError::invalid_side(
                side.label(),
                format!("the {} axis is not active on a {dimensions}D mesh", side.axis()),
            )
        })
    }
}

#[cfg(not(feature = "parallel"))]
fn assemble_kronecker_sum(dxx: &Mat<f64>, dyy: &Mat<f64>) -> Mat<f64> {
    crate::operators::kronecker_sum(dxx, dyy)
}

#[cfg(feature = "parallel")]
fn assemble_kronecker_sum(dxx: &Mat<f64>, dyy: &Mat<f64>) -> Mat<f64> {
    crate::operators::kronecker_sum_parallel(dxx, dyy)
}

fn validate_shape(dimensions: usize, n_cells: &[usize], coordinates: &[(f64, f64)]) -> Result<()> {
    if dimensions == 0 || dimensions > MAX_DIMENSIONS {
        return Err(MeshError::invalid_config(format!(
            "mesh dimensionality {dimensions} not implemented (expected 1 or 2)"
        )));
    }
    if coordinates.len() != dimensions {
        return Err(MeshError::invalid_config(format!(
            "number of coordinate pairs ({}) needs to match dimensions ({dimensions})",
            coordinates.len()
        )));
    }
    if n_cells.len() != dimensions {
        return Err(MeshError::invalid_config(format!(
            "length of n_cells ({}) needs to match dimensions ({dimensions})",
            n_cells.len()
        )));
    }
    Ok(())
}
