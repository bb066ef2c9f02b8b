//! Mesh representation.
//!
//! Provides structured cartesian meshes for finite-volume and
//! finite-difference discretizations:
//! - Uniform 1D grids (cell-centered or node-centered)
//! - Per-axis bundles of grid, stencil and boundary vector
//! - 1D/2D cartesian meshes with an assembled Laplacian
//! - Construction parameters for outer configuration layers

mod axis_mesh;
mod cartesian;
mod config;
mod grid;

pub use axis_mesh::AxisMesh;
pub use cartesian::{CartesianMesh, MAX_DIMENSIONS};
pub use config::MeshConfig;
pub use grid::{AxisGrid, GridFamily};
