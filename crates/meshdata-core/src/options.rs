//! Configuration options for active-array resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Array names produced by internal machinery that are never picked as
/// default active scalars.
pub const DEFAULT_RESERVED_NAMES: [&str; 4] =
    ["__custom_rgba", "Normals", "vtkOriginalPointIds", "TCoords"];

/// Options controlling how an [`ArrayRegistry`](crate::ArrayRegistry) resolves
/// active arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryOptions {
    /// When a point array named `"Normals"` is adopted as active vectors.
    pub normals_adoption: NormalsAdoption,

    /// Names excluded from default active-scalars selection.
    pub reserved_names: Vec<String>,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            normals_adoption: NormalsAdoption::default(),
            reserved_names: DEFAULT_RESERVED_NAMES
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

impl RegistryOptions {
    /// Parses options from a JSON string. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Serializes the options to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns whether `name` is in the reserved exclusion set.
    #[must_use]
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_names.iter().any(|r| r == name)
    }
}

/// Trigger condition for adopting `"Normals"` as the active vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NormalsAdoption {
    /// Adopt whenever no active vectors are recorded, including after an
    /// explicit clear.
    WhileUnset,
    /// Adopt only until active vectors are explicitly set or cleared.
    #[default]
    UntilExplicitlySet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RegistryOptions::default();
        assert_eq!(options.normals_adoption, NormalsAdoption::UntilExplicitlySet);
        assert!(options.is_reserved("TCoords"));
        assert!(options.is_reserved("vtkOriginalPointIds"));
        assert!(!options.is_reserved("Elevation"));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let options =
            RegistryOptions::from_json_str(r#"{ "normals_adoption": "while_unset" }"#).unwrap();
        assert_eq!(options.normals_adoption, NormalsAdoption::WhileUnset);
        assert_eq!(options.reserved_names.len(), DEFAULT_RESERVED_NAMES.len());
    }

    #[test]
    fn test_json_round_trip() {
        let mut options = RegistryOptions::default();
        options.reserved_names.push("GhostType".to_string());
        let json = options.to_json_string().unwrap();
        assert_eq!(RegistryOptions::from_json_str(&json).unwrap(), options);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(matches!(
            RegistryOptions::from_json_str("{ not json"),
            Err(crate::MeshDataError::JsonError(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            RegistryOptions::load("/nonexistent/meshdata-options.json"),
            Err(crate::MeshDataError::IoError(_))
        ));
    }
}
