//! Scalar state array (phi / temperature) laid out like the mesh unknowns.

use crate::error::{MeshError, Result};
use crate::mesh::CartesianMesh;
use crate::types::{Axis, Side};

/// One value per mesh unknown, stored as `values[iy * nx + ix]`.
///
/// Under the node-based scheme this array, not the boundary vector, is the
/// authoritative store for Dirichlet boundary values.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarField {
    dimensions: usize,
    nx: usize,
    ny: usize,
    values: Vec<f64>,
}

impl ScalarField {
    /// Zero field matching `mesh`.
    pub fn zeros(mesh: &CartesianMesh) -> Self {
        Self::uniform(mesh, 0.0)
    }

    /// Field with every entry equal to `value`.
    pub fn uniform(mesh: &CartesianMesh, value: f64) -> Self {
        let (nx, ny) = mesh_shape(mesh);
        Self {
            dimensions: mesh.dimensions(),
            nx,
            ny,
            values: vec![value; nx * ny],
        }
    }

    /// Wrap existing values; the length must equal the mesh's total cells.
    pub fn from_values(mesh: &CartesianMesh, values: Vec<f64>) -> Result<Self> {
        let (nx, ny) = mesh_shape(mesh);
        if values.len() != nx * ny {
            return Err(MeshError::UnsupportedPhiShape {
                expected: nx * ny,
                actual: values.len(),
            });
        }
        Ok(Self {
            dimensions: mesh.dimensions(),
            nx,
            ny,
            values,
        })
    }

    /// `(nx, ny)`; `ny` is 1 for a 1D field.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    #[inline]
    pub fn get(&self, ix: usize, iy: usize) -> f64 {
        self.values[iy * self.nx + ix]
    }

    #[inline]
    pub fn set(&mut self, ix: usize, iy: usize, value: f64) {
        self.values[iy * self.nx + ix] = value;
    }

    /// Set every entry to `value`.
    pub fn fill(&mut self, value: f64) {
        self.values.fill(value);
    }

    /// Write a Dirichlet value into every entry on the `side` boundary line.
    ///
    /// Companion to the node-based stencil closure, which zeroes the boundary
    /// row and leaves the value to this array.
    pub fn impose_dirichlet(&mut self, side: Side, value: f64) -> Result<()> {
        if side.axis() == Axis::Y && self.dimensions < 2 {
            return Err(MeshError::invalid_side(
                side.label(),
                format!("the y axis is not active on a {}D field", self.dimensions),
            ));
        }

        let (nx, ny) = (self.nx, self.ny);
        match side {
            Side::Left | Side::Right => {
                let ix = if side == Side::Left { 0 } else { nx - 1 };
                for iy in 0..ny {
                    self.values[iy * nx + ix] = value;
                }
            }
            Side::Top | Side::Bottom => {
                let iy = if side == Side::Top { 0 } else { ny - 1 };
                self.values[iy * nx..(iy + 1) * nx].fill(value);
            }
        }
        Ok(())
    }
}

fn mesh_shape(mesh: &CartesianMesh) -> (usize, usize) {
    let nx = mesh.axis(Axis::X).map_or(0, |a| a.n_cells());
    let ny = mesh.axis(Axis::Y).map_or(1, |a| a.n_cells());
    (nx, ny)
}
