//! Active array records.

use serde::{Deserialize, Serialize};

use crate::association::FieldAssociation;

/// Identifies the active array for one role.
///
/// When `name` is `None` no array is active and `association` carries no
/// meaning. Records are replaced, never mutated in place, when the active
/// array changes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActiveArrayInfo {
    /// Which table the array lives in.
    pub association: FieldAssociation,
    /// The array name, if an array is active.
    pub name: Option<String>,
}

impl ActiveArrayInfo {
    /// Creates a record for the named array.
    pub fn new(association: FieldAssociation, name: impl Into<String>) -> Self {
        Self {
            association,
            name: Some(name.into()),
        }
    }

    /// Creates a "no active array" record that keeps `association`.
    #[must_use]
    pub fn inactive(association: FieldAssociation) -> Self {
        Self {
            association,
            name: None,
        }
    }

    /// Returns the array name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns true if an array is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.name.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_inactive_point() {
        let info = ActiveArrayInfo::default();
        assert_eq!(info.association, FieldAssociation::Point);
        assert!(!info.is_active());
    }

    #[test]
    fn test_equality_needs_both_fields() {
        let a = ActiveArrayInfo::new(FieldAssociation::Point, "a");
        assert_eq!(a, ActiveArrayInfo::new(FieldAssociation::Point, "a"));
        assert_ne!(a, ActiveArrayInfo::new(FieldAssociation::Cell, "a"));
        assert_ne!(a, ActiveArrayInfo::new(FieldAssociation::Point, "b"));
    }

    #[test]
    fn test_json_round_trip_uses_integer_association() {
        let info = ActiveArrayInfo::new(FieldAssociation::Cell, "pressure");
        let json = serde_json::to_string(&info).unwrap();
        assert_eq!(json, r#"{"association":1,"name":"pressure"}"#);
        let back: ActiveArrayInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, info);
    }
}
