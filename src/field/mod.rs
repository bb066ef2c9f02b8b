//! Solution state arrays living on a mesh.

mod scalar;

pub use scalar::ScalarField;
