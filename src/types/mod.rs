//! Strongly-typed domain types.
//!
//! Small value types that keep the mesh API self-documenting:
//!
//! - [`Axis`] and [`AxisSlots`] replace per-axis attribute names
//! - [`Side`] names a domain boundary; [`boundary_index`] and
//!   [`first_interior_index`] map it onto a 1D array
//! - [`MeshScheme`] selects cell-centered or node-based closures
//! - [`AxisBounds`] is a validated `[min, max]` interval
//!
//! # Example
//!
//! ```
//! use cartmesh::types::{Axis, Side, boundary_index};
//!
//! let side: Side = "bottom".parse().unwrap();
//! assert_eq!(side.axis(), Axis::Y);
//! assert_eq!(boundary_index(side, 4), 3);
//! ```

mod axis;
mod bounds;
mod scheme;
mod sides;

pub use axis::{Axis, AxisSlots};
pub use bounds::AxisBounds;
pub use scheme::MeshScheme;
pub use sides::{Side, boundary_index, first_interior_index};
