//! # cartmesh
//!
//! Structured discretization operators for finite-volume and
//! finite-difference solvers on 1D and 2D cartesian domains.
//!
//! This crate provides the operator-assembly layer:
//! - Uniform axis grids (cell-centered or node-centered)
//! - Tridiagonal stencil matrices (second derivative, upwind, central,
//!   MacCormack predictor)
//! - Dirichlet/Neumann closures applied to stencils and boundary vectors
//! - Laplacian assembly: direct rescaling in 1D, Kronecker sum in 2D
//! - Scalar state arrays carrying node-based Dirichlet values
//!
//! Time stepping and linear solves are left to the caller.
//!
//! # Example
//!
//! ```
//! use cartmesh::{Axis, CartesianMesh, MeshScheme, Side};
//!
//! let mut mesh = CartesianMesh::new(
//!     2,
//!     &[3, 4],
//!     &[(0.0, 3.0), (0.0, 2.0)],
//!     MeshScheme::CellCentered,
//! )
//! .unwrap();
//!
//! mesh.set_dirichlet_boundary(Side::Left, 30.0).unwrap();
//! mesh.set_neumann_boundary(Side::Top, -10.0).unwrap();
//!
//! assert_eq!(mesh.laplacian().nrows(), 12);
//! assert_eq!(mesh.boundary_vector(Axis::X).unwrap().values(), &[60.0, 0.0, 0.0]);
//! ```
//!
//! # Features
//!
//! - `parallel`: assemble the 2D Kronecker sum with rayon
//! - `serde`: serialize/deserialize [`MeshConfig`] and the label enums

pub mod error;
pub mod field;
pub mod mesh;
pub mod operators;
pub mod types;

pub use error::{MeshError, Result};
pub use field::ScalarField;
pub use mesh::{AxisGrid, AxisMesh, CartesianMesh, GridFamily, MeshConfig};
pub use operators::{BoundaryVector, StencilCoefficients, StencilFamily, StencilMatrix};
pub use types::{Axis, AxisBounds, MeshScheme, Side};
