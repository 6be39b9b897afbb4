//! meshdata: mesh datasets with named arrays and active-array bookkeeping.
//!
//! A [`DataSet`] holds points and three attribute tables: one tuple per
//! point, one tuple per cell, and free-form field data. For each of the
//! scalars, vectors and tensors roles one array can be *active*, the default
//! input for whatever consumes the dataset (coloring, glyphing, ...).
//!
//! # Quick Start
//!
//! ```
//! use meshdata::*;
//!
//! fn main() -> Result<()> {
//!     let mut mesh = DataSet::new(vec![Vec3::ZERO, Vec3::X, Vec3::Y], 1);
//!     mesh.set_array("height", vec![0.0, 1.0, 2.0])?;
//!     assert_eq!(mesh.active_scalars_name().as_deref(), Some("height"));
//!
//!     mesh.rename_array("height", "z", FieldAssociation::Cell)?;
//!     assert_eq!(mesh.active_scalars_name().as_deref(), Some("z"));
//!     Ok(())
//! }
//! ```
//!
//! # Active array resolution
//!
//! Active scalars resolve lazily. When nothing is selected, or the selected
//! array was removed, the first point array (then cell array) whose name is
//! not reserved for internal use becomes active. Vectors adopt a point array
//! named `"Normals"` when none are selected, subject to
//! [`RegistryOptions::normals_adoption`]. Tensors are never chosen implicitly.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]

mod dataset;
mod init;

pub use dataset::{DataSet, TCOORDS_ARRAY};
pub use init::init_logging;

// Re-export core types
pub use meshdata_core::{
    ActiveArrayInfo, ArrayRegistry, AttributeRole, AttributeSource, AttributeTables, DataArray,
    DataSetAttributes, FieldAssociation, MeshDataError, NormalsAdoption, RegistryOptions, Result,
    Texture, TextureSelector, DEFAULT_RESERVED_NAMES, NORMALS_ARRAY,
};

pub use glam::Vec3;
pub use image::RgbaImage;
