//! Discrete operators: stencil matrices, boundary vectors, Kronecker assembly.
//!
//! This module provides:
//! - Tridiagonal stencil matrices for one axis (`StencilMatrix`) with
//!   Dirichlet/Neumann closures for cell-centered and node-based schemes
//! - Boundary contribution vectors (`BoundaryVector`)
//! - Kronecker products and sums for composing 2D operators

mod boundary_vector;
pub mod kronecker;
mod stencil;

pub use boundary_vector::BoundaryVector;
#[cfg(feature = "parallel")]
pub use kronecker::kronecker_sum_parallel;
pub use kronecker::{identity, kron, kronecker_sum};
pub use stencil::{StencilCoefficients, StencilFamily, StencilMatrix, tridiagonal};
