//! Array associations and attribute roles.
//!
//! A [`FieldAssociation`] says which table of a dataset an array lives in,
//! and an [`AttributeRole`] says what an array is designated for within
//! that table (scalars for coloring, vectors for glyphing, and so on).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MeshDataError;

/// Which storage table an array belongs to.
///
/// Serialized as its integer value (`Point = 0`, `Cell = 1`, `None = 2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum FieldAssociation {
    /// One tuple per point.
    #[default]
    Point,
    /// One tuple per cell.
    Cell,
    /// Dataset-level field data without a length constraint.
    None,
}

impl FieldAssociation {
    /// All associations in lookup order.
    pub const ALL: [FieldAssociation; 3] = [Self::Point, Self::Cell, Self::None];

    /// Returns the integer value of this association.
    #[must_use]
    pub fn value(self) -> u8 {
        match self {
            Self::Point => 0,
            Self::Cell => 1,
            Self::None => 2,
        }
    }

    /// Returns whether arrays of this association can be made active.
    #[must_use]
    pub fn is_attribute(self) -> bool {
        matches!(self, Self::Point | Self::Cell)
    }
}

impl From<FieldAssociation> for u8 {
    fn from(association: FieldAssociation) -> Self {
        association.value()
    }
}

impl TryFrom<u8> for FieldAssociation {
    type Error = MeshDataError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Point),
            1 => Ok(Self::Cell),
            2 => Ok(Self::None),
            other => Err(MeshDataError::InvalidAssociation(other.to_string())),
        }
    }
}

impl FromStr for FieldAssociation {
    type Err = MeshDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "point" => Ok(Self::Point),
            "cell" => Ok(Self::Cell),
            "field" | "none" => Ok(Self::None),
            _ => Err(MeshDataError::InvalidAssociation(s.to_string())),
        }
    }
}

impl fmt::Display for FieldAssociation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Point => "POINT",
            Self::Cell => "CELL",
            Self::None => "NONE",
        };
        f.write_str(name)
    }
}

/// The role an array can be designated for within an attribute table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeRole {
    /// Scalar values used for coloring (1 to 4 components).
    Scalars,
    /// Vector values (exactly 3 components).
    Vectors,
    /// Tensor values (6 symmetric or 9 full components).
    Tensors,
    /// Texture coordinates (1 to 3 components).
    TCoords,
    /// Normals (exactly 3 components).
    Normals,
}

impl AttributeRole {
    /// All roles, in table slot order.
    pub const ALL: [AttributeRole; 5] = [
        Self::Scalars,
        Self::Vectors,
        Self::Tensors,
        Self::TCoords,
        Self::Normals,
    ];

    /// Returns whether an array with `n_components` components can fill this role.
    #[must_use]
    pub fn accepts_components(self, n_components: usize) -> bool {
        match self {
            Self::Scalars => (1..=4).contains(&n_components),
            Self::Vectors | Self::Normals => n_components == 3,
            Self::Tensors => n_components == 6 || n_components == 9,
            Self::TCoords => (1..=3).contains(&n_components),
        }
    }

    pub(crate) fn slot(self) -> usize {
        match self {
            Self::Scalars => 0,
            Self::Vectors => 1,
            Self::Tensors => 2,
            Self::TCoords => 3,
            Self::Normals => 4,
        }
    }
}

impl fmt::Display for AttributeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Scalars => "scalars",
            Self::Vectors => "vectors",
            Self::Tensors => "tensors",
            Self::TCoords => "texture coordinates",
            Self::Normals => "normals",
        };
        f.write_str(name)
    }
}
