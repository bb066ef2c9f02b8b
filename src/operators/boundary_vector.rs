//! Boundary contribution vector for one axis.
//!
//! Holds the source terms left over after a ghost cell/node has been folded
//! into the stencil matrix. Only the boundary entries are ever non-zero.

use crate::types::{MeshScheme, Side, boundary_index};

/// Length-N vector of boundary contributions.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundaryVector {
    values: Vec<f64>,
}

impl BoundaryVector {
    /// All-zero vector for `n_cells` unknowns.
    pub fn new(n_cells: usize) -> Self {
        Self {
            values: vec![0.0; n_cells],
        }
    }

    #[inline]
    pub fn n_cells(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub fn get(&self, i: usize) -> f64 {
        self.values[i]
    }

    /// Record a Dirichlet value on `side`.
    ///
    /// Node-based meshes carry the value in the state array instead, so the
    /// entry is cleared.
    pub fn apply_dirichlet(&mut self, side: Side, value: f64, scheme: MeshScheme) {
        let i = boundary_index(side, self.values.len());
        self.values[i] = match scheme {
            MeshScheme::CellCentered => 2.0 * value,
            MeshScheme::NodeBased => 0.0,
        };
    }

    /// Record a Neumann flux on `side` (positive into the domain).
    pub fn apply_neumann(&mut self, side: Side, flux: f64, cell_width: f64, scheme: MeshScheme) {
        let i = boundary_index(side, self.values.len());
        self.values[i] = match scheme {
            MeshScheme::CellCentered => flux * cell_width,
            MeshScheme::NodeBased => 2.0 * flux * cell_width,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_starts_at_zero() {
        let v = BoundaryVector::new(5);
        assert_eq!(v.n_cells(), 5);
        assert!(v.values().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_cell_centered_dirichlet() {
        let mut v = BoundaryVector::new(4);
        v.apply_dirichlet(Side::Left, 30.0, MeshScheme::CellCentered);
        v.apply_dirichlet(Side::Right, 30.0, MeshScheme::CellCentered);
        assert_eq!(v.values(), &[60.0, 0.0, 0.0, 60.0]);
    }

    #[test]
    fn test_node_based_dirichlet_clears_entry() {
        let mut v = BoundaryVector::new(4);
        v.apply_neumann(Side::Top, 5.0, 0.5, MeshScheme::NodeBased);
        assert_eq!(v.get(0), 5.0);
        v.apply_dirichlet(Side::Top, 30.0, MeshScheme::NodeBased);
        assert_eq!(v.values(), &[0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_cell_centered_neumann() {
        let mut v = BoundaryVector::new(3);
        v.apply_neumann(Side::Left, -10.0, 1.0 / 3.0, MeshScheme::CellCentered);
        assert_relative_eq!(v.get(0), -10.0 / 3.0, epsilon = 1e-14);
        assert_eq!(v.get(2), 0.0);

        let mut v = BoundaryVector::new(4);
        v.apply_neumann(Side::Bottom, -10.0, 0.5, MeshScheme::CellCentered);
        assert_eq!(v.values(), &[0.0, 0.0, 0.0, -5.0]);
    }

    #[test]
    fn test_node_based_neumann() {
        let mut v = BoundaryVector::new(4);
        v.apply_neumann(Side::Right, 3.0, 0.25, MeshScheme::NodeBased);
        assert_eq!(v.values(), &[0.0, 0.0, 0.0, 1.5]);
    }
}
