//! Error types for meshdata.

use thiserror::Error;

use crate::association::{AttributeRole, FieldAssociation};

/// The main error type for meshdata operations.
#[derive(Error, Debug)]
pub enum MeshDataError {
    /// No table holds an array with the given name.
    #[error("array '{0}' not found")]
    ArrayNotFound(String),

    /// The array resolved to an association the operation cannot use.
    #[error("data field ({association}) of array '{name}' not usable")]
    InvalidField {
        name: String,
        association: FieldAssociation,
    },

    /// The attribute table rejected an activation request.
    #[error("data field ({association}) could not set '{name}' as the active {role}")]
    ActivationError {
        name: String,
        association: FieldAssociation,
        role: AttributeRole,
    },

    /// A value had the wrong shape or kind for where it was used.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A preference string did not name a known association.
    #[error("invalid association '{0}', expected one of 'point', 'cell' or 'field'")]
    InvalidAssociation(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for meshdata operations.
pub type Result<T> = std::result::Result<T, MeshDataError>;
