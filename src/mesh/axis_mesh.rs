//! Per-axis discretization: grid + stencil + boundary vector.

use faer::Mat;

use super::grid::AxisGrid;
use crate::error::{MeshError, Result};
use crate::operators::{BoundaryVector, StencilMatrix};
use crate::types::{Axis, MeshScheme, Side};

/// Everything one axis contributes to the mesh.
///
/// The grid, stencil and boundary vector always share the same `n_cells`.
#[derive(Clone, Debug)]
pub struct AxisMesh {
    axis: Axis,
    scheme: MeshScheme,
    grid: AxisGrid,
    stencil: StencilMatrix,
    boundary: BoundaryVector,
}

impl AxisMesh {
    /// Discretize `bounds` along `axis` into `n_cells` unknowns.
    pub fn new(axis: Axis, n_cells: usize, bounds: (f64, f64), scheme: MeshScheme) -> Result<Self> {
        let grid = AxisGrid::new(n_cells, bounds, scheme.into())?;
        let stencil = StencilMatrix::second_derivative(n_cells)?;
        let boundary = BoundaryVector::new(n_cells);

        Ok(Self {
            axis,
            scheme,
            grid,
            stencil,
            boundary,
        })
    }

    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    #[inline]
    pub fn scheme(&self) -> MeshScheme {
        self.scheme
    }

    #[inline]
    pub fn n_cells(&self) -> usize {
        self.grid.n_cells()
    }

    #[inline]
    pub fn grid(&self) -> &AxisGrid {
        &self.grid
    }

    #[inline]
    pub fn stencil(&self) -> &StencilMatrix {
        &self.stencil
    }

    #[inline]
    pub fn boundary_vector(&self) -> &BoundaryVector {
        &self.boundary
    }

    #[inline]
    pub fn cell_width(&self) -> f64 {
        self.grid.cell_width()
    }

    #[inline]
    pub fn cell_coordinates(&self) -> &[f64] {
        self.grid.cell_coordinates()
    }

    /// Whether `side` closes this axis.
    #[inline]
    pub fn accepts(&self, side: Side) -> bool {
        side.axis() == self.axis
    }

    /// Impose a Dirichlet value on `side`.
    pub fn set_dirichlet(&mut self, side: Side, value: f64) -> Result<()> {
        self.check_side(side)?;
        self.stencil.apply_dirichlet(side, self.scheme)?;
        self.boundary.apply_dirichlet(side, value, self.scheme);
        Ok(())
    }

    /// Impose a Neumann flux on `side` (positive into the domain).
    pub fn set_neumann(&mut self, side: Side, flux: f64) -> Result<()> {
        self.check_side(side)?;
        self.stencil.apply_neumann(side, self.scheme)?;
        self.boundary
            .apply_neumann(side, flux, self.grid.cell_width(), self.scheme);
        Ok(())
    }

    /// Stencil scaled by `1 / cell_width²`.
    pub fn second_derivative(&self) -> Mat<f64> {
        let w = self.grid.cell_width();
        self.stencil.scaled(1.0 / (w * w))
    }

    fn check_side(&self, side: Side) -> Result<()> {
        if self.accepts(side) {
            Ok(())
        } else {
            Err(MeshError::invalid_side(
                side.label(),
                format!("not a boundary of the {} axis", self.axis),
            ))
        }
    }
}
