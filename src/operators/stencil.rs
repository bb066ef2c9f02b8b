//! Tridiagonal stencil matrices and their boundary closures.
//!
//! Every family shares the same layout: row i holds
//! `lower` at column i-1, `middle` at column i and `upper` at column i+1.
//!
//! | Family | lower | middle | upper |
//! |--------|-------|--------|-------|
//! | `SecondDerivative` | 1 | −2 | 1 |
//! | `Upwind` | 1 | −1 | 0 |
//! | `Central` | 0.5 | 0 | −0.5 |
//! | `MacCormackPredictor` | −1 | 1 | 0 |
//!
//! Boundary closures fold a ghost cell (cell-centered) or ghost node
//! (node-based) into the boundary row:
//!
//! ```text
//! Dirichlet, cell-centered:  u_ghost = 2 u_b - u_0      => diag -3
//! Neumann,   cell-centered:  u_ghost = u_0 (+ flux)     => diag -1
//! Dirichlet, node-based:     row zeroed, value stored in the state array
//! Neumann,   node-based:     u_ghost = u_1 (+ flux)     => neighbour 2
//! ```

use faer::Mat;

use crate::error::{MeshError, Result};
use crate::types::{MeshScheme, Side, boundary_index, first_interior_index};

/// Coefficient triple of a tridiagonal stencil.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StencilCoefficients {
    /// Sub-diagonal (column i-1)
    pub lower: f64,
    /// Main diagonal
    pub middle: f64,
    /// Super-diagonal (column i+1)
    pub upper: f64,
}

impl StencilCoefficients {
    pub const fn new(lower: f64, middle: f64, upper: f64) -> Self {
        Self {
            lower,
            middle,
            upper,
        }
    }
}

/// Stencil family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum StencilFamily {
    /// Second derivative, `[1, -2, 1]`.
    #[default]
    SecondDerivative,
    /// First-order upwind for positive advection velocity, `[1, -1, 0]`.
    Upwind,
    /// First-order central, `[0.5, 0, -0.5]`.
    Central,
    /// MacCormack predictor, `[-1, 1, 0]`, with a corrector companion.
    MacCormackPredictor,
}

impl StencilFamily {
    /// The coefficient triple for this family.
    pub fn coefficients(self) -> StencilCoefficients {
        match self {
            StencilFamily::SecondDerivative => StencilCoefficients::new(1.0, -2.0, 1.0),
            StencilFamily::Upwind => StencilCoefficients::new(1.0, -1.0, 0.0),
            StencilFamily::Central => StencilCoefficients::new(0.5, 0.0, -0.5),
            StencilFamily::MacCormackPredictor => StencilCoefficients::new(-1.0, 1.0, 0.0),
        }
    }
}

/// N×N tridiagonal stencil matrix for one axis.
#[derive(Clone, Debug)]
pub struct StencilMatrix {
    n_cells: usize,
    family: StencilFamily,
    coefficients: Mat<f64>,
    /// `-transpose(coefficients)` at construction (MacCormack only)
    predictor: Option<Mat<f64>>,
}

impl StencilMatrix {
    /// Build the stencil for `n_cells` unknowns.
    pub fn new(n_cells: usize, family: StencilFamily) -> Result<Self> {
        if n_cells == 0 {
            return Err(MeshError::invalid_config(
                "stencil matrix needs at least one cell",
            ));
        }

        let coefficients = tridiagonal(n_cells, family.coefficients());
        let predictor = match family {
            StencilFamily::MacCormackPredictor => Some(Mat::from_fn(n_cells, n_cells, |i, j| {
                -coefficients[(j, i)]
            })),
            _ => None,
        };

        Ok(Self {
            n_cells,
            family,
            coefficients,
            predictor,
        })
    }

    /// Standard second-derivative stencil.
    pub fn second_derivative(n_cells: usize) -> Result<Self> {
        Self::new(n_cells, StencilFamily::SecondDerivative)
    }

    #[inline]
    pub fn n_cells(&self) -> usize {
        self.n_cells
    }

    #[inline]
    pub fn family(&self) -> StencilFamily {
        self.family
    }

    /// Current coefficients, including any boundary closures.
    #[inline]
    pub fn matrix(&self) -> &Mat<f64> {
        &self.coefficients
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.coefficients[(row, col)]
    }

    /// Corrector companion of a MacCormack stencil.
    ///
    /// Derived once at construction; boundary closures do not touch it.
    pub fn predictor_matrix(&self) -> Option<&Mat<f64>> {
        self.predictor.as_ref()
    }

    /// Copy of the coefficients multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Mat<f64> {
        let n = self.n_cells;
        Mat::from_fn(n, n, |i, j| self.coefficients[(i, j)] * factor)
    }

    /// Impose a Dirichlet closure on `side`.
    pub fn apply_dirichlet(&mut self, side: Side, scheme: MeshScheme) -> Result<()> {
        let i = boundary_index(side, self.n_cells);
        self.reset_row(i);

        match scheme {
            MeshScheme::CellCentered => {
                self.coefficients[(i, i)] = -3.0;
            }
            MeshScheme::NodeBased => {
                for j in 0..self.n_cells {
                    self.coefficients[(i, j)] = 0.0;
                }
            }
        }
        Ok(())
    }

    /// Impose a Neumann closure on `side`.
    ///
    /// The node-based closure needs an interior neighbour, so it fails for a
    /// single-cell stencil; the matrix is left untouched in that case.
    pub fn apply_neumann(&mut self, side: Side, scheme: MeshScheme) -> Result<()> {
        let i = boundary_index(side, self.n_cells);

        match scheme {
            MeshScheme::CellCentered => {
                self.reset_row(i);
                self.coefficients[(i, i)] = -1.0;
            }
            MeshScheme::NodeBased => {
                let j = first_interior_index(side, self.n_cells).ok_or_else(|| {
                    MeshError::invalid_config(format!(
                        "node-based Neumann closure on '{side}' needs at least 2 nodes"
                    ))
                })?;
                self.reset_row(i);
                self.coefficients[(i, j)] = 2.0;
            }
        }
        Ok(())
    }

    /// Check that every entry off the three central diagonals is zero.
    pub fn is_tridiagonal(&self) -> bool {
        let n = self.n_cells;
        (0..n).all(|i| (0..n).all(|j| i.abs_diff(j) <= 1 || self.coefficients[(i, j)] == 0.0))
    }

    /// Restore row `i` to the family coefficients, dropping any earlier closure.
    fn reset_row(&mut self, i: usize) {
        let n = self.n_cells;
        let c = self.family.coefficients();
        for j in 0..n {
            self.coefficients[(i, j)] = 0.0;
        }
        if i > 0 {
            self.coefficients[(i, i - 1)] = c.lower;
        }
        self.coefficients[(i, i)] = c.middle;
        if i + 1 < n {
            self.coefficients[(i, i + 1)] = c.upper;
        }
    }
}

/// Assemble an n×n tridiagonal matrix from a coefficient triple.
pub fn tridiagonal(n: usize, c: StencilCoefficients) -> Mat<f64> {
    Mat::from_fn(n, n, |i, j| {
        if i == j {
            c.middle
        } else if j + 1 == i {
            c.lower
        } else if i + 1 == j {
            c.upper
        } else {
            0.0
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_rows(m: &Mat<f64>) -> Vec<Vec<f64>> {
        (0..m.nrows())
            .map(|i| (0..m.ncols()).map(|j| m[(i, j)]).collect())
            .collect()
    }

    #[test]
    fn test_second_derivative_layout() {
        for n in 1..=6 {
            let s = StencilMatrix::second_derivative(n).unwrap();
            assert!(s.is_tridiagonal());
            for i in 0..n {
                for j in 0..n {
                    let expected = match i.abs_diff(j) {
                        0 => -2.0,
                        1 => 1.0,
                        _ => 0.0,
                    };
                    assert_eq!(s.get(i, j), expected, "entry ({i}, {j}) for n = {n}");
                }
            }
        }
    }

    #[test]
    fn test_family_triples() {
        let up = StencilMatrix::new(3, StencilFamily::Upwind).unwrap();
        assert_eq!(
            to_rows(up.matrix()),
            vec![
                vec![-1.0, 0.0, 0.0],
                vec![1.0, -1.0, 0.0],
                vec![0.0, 1.0, -1.0],
            ]
        );

        let central = StencilMatrix::new(3, StencilFamily::Central).unwrap();
        assert_eq!(
            to_rows(central.matrix()),
            vec![
                vec![0.0, -0.5, 0.0],
                vec![0.5, 0.0, -0.5],
                vec![0.0, 0.5, 0.0],
            ]
        );
        assert!(central.predictor_matrix().is_none());
    }

    #[test]
    fn test_maccormack_predictor_companion() {
        let mc = StencilMatrix::new(3, StencilFamily::MacCormackPredictor).unwrap();
        assert_eq!(
            to_rows(mc.matrix()),
            vec![
                vec![1.0, 0.0, 0.0],
                vec![-1.0, 1.0, 0.0],
                vec![0.0, -1.0, 1.0],
            ]
        );
        let predictor = mc.predictor_matrix().unwrap();
        assert_eq!(
            to_rows(predictor),
            vec![
                vec![-1.0, 1.0, 0.0],
                vec![0.0, -1.0, 1.0],
                vec![0.0, 0.0, -1.0],
            ]
        );
    }

    #[test]
    fn test_maccormack_predictor_unchanged_by_closure() {
        let mut mc = StencilMatrix::new(4, StencilFamily::MacCormackPredictor).unwrap();
        let before = to_rows(mc.predictor_matrix().unwrap());
        mc.apply_dirichlet(Side::Left, MeshScheme::CellCentered)
            .unwrap();
        assert_eq!(mc.get(0, 0), -3.0);
        assert_eq!(to_rows(mc.predictor_matrix().unwrap()), before);
    }

    #[test]
    fn test_zero_cells_rejected() {
        assert!(matches!(
            StencilMatrix::second_derivative(0),
            Err(MeshError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_cell_centered_dirichlet() {
        let mut s = StencilMatrix::second_derivative(4).unwrap();
        s.apply_dirichlet(Side::Left, MeshScheme::CellCentered)
            .unwrap();
        s.apply_dirichlet(Side::Right, MeshScheme::CellCentered)
            .unwrap();
        assert_eq!(
            to_rows(s.matrix()),
            vec![
                vec![-3.0, 1.0, 0.0, 0.0],
                vec![1.0, -2.0, 1.0, 0.0],
                vec![0.0, 1.0, -2.0, 1.0],
                vec![0.0, 0.0, 1.0, -3.0],
            ]
        );
    }

    #[test]
    fn test_cell_centered_neumann() {
        let mut s = StencilMatrix::second_derivative(4).unwrap();
        s.apply_neumann(Side::Right, MeshScheme::CellCentered)
            .unwrap();
        assert_eq!(s.get(3, 3), -1.0);
        assert_eq!(s.get(3, 2), 1.0);
        assert_eq!(s.get(0, 0), -2.0);
    }

    #[test]
    fn test_node_based_dirichlet_zeroes_row() {
        let mut s = StencilMatrix::second_derivative(4).unwrap();
        s.apply_dirichlet(Side::Top, MeshScheme::NodeBased).unwrap();
        assert!((0..4).all(|j| s.get(0, j) == 0.0));
        assert_eq!(s.get(1, 0), 1.0);
    }

    #[test]
    fn test_node_based_neumann_ghost_node() {
        let mut s = StencilMatrix::second_derivative(4).unwrap();
        s.apply_neumann(Side::Left, MeshScheme::NodeBased).unwrap();
        s.apply_neumann(Side::Bottom, MeshScheme::NodeBased).unwrap();
        assert_eq!(to_rows(s.matrix())[0], vec![-2.0, 2.0, 0.0, 0.0]);
        assert_eq!(to_rows(s.matrix())[3], vec![0.0, 0.0, 2.0, -2.0]);
    }

    #[test]
    fn test_node_based_neumann_single_cell_fails_cleanly() {
        let mut s = StencilMatrix::second_derivative(1).unwrap();
        let err = s.apply_neumann(Side::Left, MeshScheme::NodeBased);
        assert!(matches!(err, Err(MeshError::InvalidConfiguration(_))));
        assert_eq!(s.get(0, 0), -2.0);
    }

    #[test]
    fn test_neumann_replaces_dirichlet() {
        for scheme in [MeshScheme::CellCentered, MeshScheme::NodeBased] {
            let mut replaced = StencilMatrix::second_derivative(5).unwrap();
            replaced.apply_dirichlet(Side::Left, scheme).unwrap();
            replaced.apply_neumann(Side::Left, scheme).unwrap();

            let mut direct = StencilMatrix::second_derivative(5).unwrap();
            direct.apply_neumann(Side::Left, scheme).unwrap();

            assert_eq!(to_rows(replaced.matrix()), to_rows(direct.matrix()));
        }
    }

    #[test]
    fn test_scaled() {
        let s = StencilMatrix::second_derivative(3).unwrap();
        let m = s.scaled(16.0);
        assert_eq!(m[(1, 1)], -32.0);
        assert_eq!(m[(1, 0)], 16.0);
        assert_eq!(m[(0, 2)], 0.0);
    }
}
