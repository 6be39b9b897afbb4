//! Per-association attribute tables.
//!
//! A [`DataSetAttributes`] holds the named arrays of one association (point,
//! cell or field data) in insertion order, together with the table-level
//! pointers that designate which array fills each [`AttributeRole`].

use std::fmt;

use crate::array::DataArray;
use crate::association::{AttributeRole, FieldAssociation};
use crate::error::{MeshDataError, Result};

/// Ordered name -> array table for one association.
#[derive(Debug, Clone)]
pub struct DataSetAttributes {
    association: FieldAssociation,
    /// Required tuple count for every array, or `None` for field data.
    expected_len: Option<usize>,
    arrays: Vec<(String, DataArray)>,
    /// Active array name per role, indexed by `AttributeRole::slot`.
    active: [Option<String>; 5],
}

impl DataSetAttributes {
    /// Creates an empty table.
    ///
    /// `expected_len` is the tuple count every array must have; pass `None`
    /// for field data, which has no length constraint.
    pub fn new(association: FieldAssociation, expected_len: Option<usize>) -> Self {
        Self {
            association,
            expected_len,
            arrays: Vec::new(),
            active: Default::default(),
        }
    }

    /// Returns the association of this table.
    #[must_use]
    pub fn association(&self) -> FieldAssociation {
        self.association
    }

    /// Returns the required tuple count, if any.
    #[must_use]
    pub fn expected_len(&self) -> Option<usize> {
        self.expected_len
    }

    /// Changes the required tuple count.
    ///
    /// Fails with `SizeMismatch` if an existing array does not have the new length.
    pub fn set_expected_len(&mut self, expected_len: Option<usize>) -> Result<()> {
        if let Some(expected) = expected_len {
            if let Some((_, arr)) = self.arrays.iter().find(|(_, a)| a.len() != expected) {
                return Err(MeshDataError::SizeMismatch {
                    expected,
                    actual: arr.len(),
                });
            }
        }
        self.expected_len = expected_len;
        Ok(())
    }

    /// Returns the number of arrays.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arrays.len()
    }

    /// Returns true if the table holds no arrays.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arrays.is_empty()
    }

    /// Checks if an array with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Gets an array by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DataArray> {
        self.arrays.iter().find(|(n, _)| n == name).map(|(_, a)| a)
    }

    /// Gets a mutable array by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut DataArray> {
        self.arrays
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a)
    }

    /// Returns the array names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.arrays.iter().map(|(n, _)| n.as_str())
    }

    /// Returns `(name, array)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DataArray)> {
        self.arrays.iter().map(|(n, a)| (n.as_str(), a))
    }

    /// Adds or replaces an array.
    ///
    /// Replacing keeps the array's position; role pointers the new shape
    /// cannot fill are cleared. Returns the replaced array.
    pub fn set(&mut self, name: impl Into<String>, array: DataArray) -> Result<Option<DataArray>> {
        if let Some(expected) = self.expected_len {
            if array.len() != expected {
                return Err(MeshDataError::SizeMismatch {
                    expected,
                    actual: array.len(),
                });
            }
        }
        let name = name.into();
        match self.position(&name) {
            Some(idx) => {
                for role in AttributeRole::ALL {
                    if self.active[role.slot()].as_deref() == Some(name.as_str())
                        && !role.accepts_components(array.n_components())
                    {
                        self.active[role.slot()] = None;
                    }
                }
                Ok(Some(std::mem::replace(&mut self.arrays[idx].1, array)))
            }
            None => {
                self.arrays.push((name, array));
                Ok(None)
            }
        }
    }

    /// Removes an array by name.
    ///
    /// Any role pointer referencing the array is cleared.
    pub fn remove(&mut self, name: &str) -> Option<DataArray> {
        let idx = self.position(name)?;
        for slot in &mut self.active {
            if slot.as_deref() == Some(name) {
                *slot = None;
            }
        }
        Some(self.arrays.remove(idx).1)
    }

    /// Renames an array in place, keeping its position and role pointers.
    ///
    /// An existing array already called `new_name` is dropped.
    pub fn rename(&mut self, old_name: &str, new_name: &str) -> Result<()> {
        if old_name == new_name {
            return if self.contains(old_name) {
                Ok(())
            } else {
                Err(MeshDataError::ArrayNotFound(old_name.to_string()))
            };
        }
        if !self.contains(old_name) {
            return Err(MeshDataError::ArrayNotFound(old_name.to_string()));
        }
        self.remove(new_name);
        if let Some(idx) = self.position(old_name) {
            self.arrays[idx].0 = new_name.to_string();
        }
        for slot in &mut self.active {
            if slot.as_deref() == Some(old_name) {
                *slot = Some(new_name.to_string());
            }
        }
        Ok(())
    }

    /// Removes all arrays and clears every role pointer.
    pub fn clear(&mut self) {
        self.arrays.clear();
        self.active = Default::default();
    }

    /// Returns the name of the array filling `role`, if any.
    #[must_use]
    pub fn active_name(&self, role: AttributeRole) -> Option<&str> {
        self.active[role.slot()].as_deref()
    }

    /// Returns the array filling `role`, if any.
    #[must_use]
    pub fn active(&self, role: AttributeRole) -> Option<&DataArray> {
        self.active_name(role).and_then(|name| self.get(name))
    }

    /// Designates the array filling `role`.
    ///
    /// Returns the index of the array on success. Returns `-1` if the name
    /// is absent, if the array's component count is not valid for the role,
    /// or if this is a field-data table. Passing `None` clears the pointer
    /// and returns `0`.
    pub fn set_active(&mut self, role: AttributeRole, name: Option<&str>) -> i32 {
        let Some(name) = name else {
            self.active[role.slot()] = None;
            return 0;
        };
        if !self.association.is_attribute() {
            return -1;
        }
        let Some(idx) = self.position(name) else {
            return -1;
        };
        if !role.accepts_components(self.arrays[idx].1.n_components()) {
            return -1;
        }
        self.active[role.slot()] = Some(name.to_string());
        i32::try_from(idx).unwrap_or(i32::MAX)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.arrays.iter().position(|(n, _)| n == name)
    }
}

impl fmt::Display for DataSetAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |role| self.active_name(role).unwrap_or("None");
        writeln!(f, "meshdata DataSetAttributes")?;
        writeln!(f, "Association     : {}", self.association)?;
        writeln!(f, "Active Scalars  : {}", show(AttributeRole::Scalars))?;
        writeln!(f, "Active Vectors  : {}", show(AttributeRole::Vectors))?;
        writeln!(f, "Active Texture  : {}", show(AttributeRole::TCoords))?;
        write!(f, "Contains arrays :")?;
        if self.arrays.is_empty() {
            return write!(f, " None");
        }
        for (name, arr) in &self.arrays {
            let shape = match arr.shape() {
                (n, 1) => format!("({n},)"),
                (n, c) => format!("({n}, {c})"),
            };
            write!(f, "\n    {name:<24}float64    {shape}")?;
        }
        Ok(())
    }
}
