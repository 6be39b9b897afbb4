//! Core abstractions for meshdata.
//!
//! This crate provides the fundamental types used throughout meshdata:
//! - [`DataArray`] numeric arrays and [`DataSetAttributes`] tables keyed by name
//! - [`FieldAssociation`] and [`AttributeRole`] for where an array lives and what it is for
//! - [`ArrayRegistry`] for active scalars/vectors/tensors bookkeeping
//! - [`AttributeSource`], the capability the registry operates through
//! - Configuration options and textures

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod active;
pub mod array;
pub mod association;
pub mod attributes;
pub mod error;
pub mod options;
pub mod registry;
pub mod source;
pub mod texture;

pub use active::ActiveArrayInfo;
pub use array::DataArray;
pub use association::{AttributeRole, FieldAssociation};
pub use attributes::DataSetAttributes;
pub use error::{MeshDataError, Result};
pub use options::{NormalsAdoption, RegistryOptions, DEFAULT_RESERVED_NAMES};
pub use registry::{ArrayRegistry, NORMALS_ARRAY};
pub use source::{AttributeSource, AttributeTables};
pub use texture::{Texture, TextureSelector};

// Re-export glam types for convenience
pub use glam::Vec3;
