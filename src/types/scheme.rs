//! Mesh discretization scheme.

use std::fmt;
use std::str::FromStr;

use crate::error::{MeshError, Result};

/// How unknowns are placed and how boundary closures are written.
///
/// | Scheme | Unknowns | Dirichlet row | Neumann row |
/// |--------|----------|---------------|-------------|
/// | `CellCentered` | cell midpoints | diagonal −3 | diagonal −1 |
/// | `NodeBased` | bounds + interior nodes | zeroed | neighbour 2 |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MeshScheme {
    /// Finite-volume, volume-averaged cells.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "finite_volume"))]
    CellCentered,
    /// Finite-difference nodes.
    #[cfg_attr(feature = "serde", serde(alias = "finite_difference"))]
    NodeBased,
}

impl MeshScheme {
    /// Canonical label as used by configuration files.
    pub fn label(self) -> &'static str {
        match self {
            MeshScheme::CellCentered => "finite_volume",
            MeshScheme::NodeBased => "finite_difference",
        }
    }
}

impl fmt::Display for MeshScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MeshScheme {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "finite_volume" | "cell_centered" | "cell-centered" => Ok(MeshScheme::CellCentered),
            "finite_difference" | "node_based" | "node-based" => Ok(MeshScheme::NodeBased),
            other => Err(MeshError::invalid_config(format!(
                "{other}: is not an implemented mesh scheme"
            ))),
        }
    }
}
