//! The capability an [`ArrayRegistry`](crate::ArrayRegistry) operates through.
//!
//! A registry never owns arrays. It reads and updates whatever implements
//! [`AttributeSource`]: three attribute tables plus a way to push an active
//! selection down into them.

use crate::array::DataArray;
use crate::association::{AttributeRole, FieldAssociation};
use crate::attributes::DataSetAttributes;
use crate::error::{MeshDataError, Result};

/// Point, cell and field tables with active-array plumbing.
pub trait AttributeSource {
    /// Returns the table for `association`.
    fn attributes(&self, association: FieldAssociation) -> &DataSetAttributes;

    /// Returns the mutable table for `association`.
    fn attributes_mut(&mut self, association: FieldAssociation) -> &mut DataSetAttributes;

    /// Finds an array by name across the point, cell and field tables.
    ///
    /// When several tables hold `name`, the `preference` table wins if it is
    /// one of them; otherwise the first holder in point, cell, field order.
    fn lookup(
        &self,
        name: &str,
        preference: FieldAssociation,
    ) -> Result<(&DataArray, FieldAssociation)> {
        let association = if self.attributes(preference).contains(name) {
            preference
        } else {
            FieldAssociation::ALL
                .into_iter()
                .find(|a| self.attributes(*a).contains(name))
                .ok_or_else(|| MeshDataError::ArrayNotFound(name.to_string()))?
        };
        self.attributes(association)
            .get(name)
            .map(|arr| (arr, association))
            .ok_or_else(|| MeshDataError::ArrayNotFound(name.to_string()))
    }

    /// Designates `name` as the array filling `role` in the `association` table.
    ///
    /// Returns a negative status if the table rejects the selection.
    fn apply_active(
        &mut self,
        role: AttributeRole,
        association: FieldAssociation,
        name: Option<&str>,
    ) -> i32 {
        self.attributes_mut(association).set_active(role, name)
    }
}

/// The three attribute tables of a dataset.
#[derive(Debug, Clone)]
pub struct AttributeTables {
    pub point: DataSetAttributes,
    pub cell: DataSetAttributes,
    pub field: DataSetAttributes,
}

impl AttributeTables {
    /// Creates empty tables sized for `n_points` points and `n_cells` cells.
    pub fn new(n_points: usize, n_cells: usize) -> Self {
        Self {
            point: DataSetAttributes::new(FieldAssociation::Point, Some(n_points)),
            cell: DataSetAttributes::new(FieldAssociation::Cell, Some(n_cells)),
            field: DataSetAttributes::new(FieldAssociation::None, None),
        }
    }

    /// Returns the total number of arrays over all tables.
    #[must_use]
    pub fn n_arrays(&self) -> usize {
        self.point.len() + self.cell.len() + self.field.len()
    }
}

impl AttributeSource for AttributeTables {
    fn attributes(&self, association: FieldAssociation) -> &DataSetAttributes {
        match association {
            FieldAssociation::Point => &self.point,
            FieldAssociation::Cell => &self.cell,
            FieldAssociation::None => &self.field,
        }
    }

    fn attributes_mut(&mut self, association: FieldAssociation) -> &mut DataSetAttributes {
        match association {
            FieldAssociation::Point => &mut self.point,
            FieldAssociation::Cell => &mut self.cell,
            FieldAssociation::None => &mut self.field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables_with_shared_name() -> AttributeTables {
        let mut tables = AttributeTables::new(2, 2);
        tables.point.set("a", vec![1.0, 1.0].into()).unwrap();
        tables.cell.set("a", vec![2.0, 2.0].into()).unwrap();
        tables.field.set("meta", vec![3.0].into()).unwrap();
        tables
    }

    #[test]
    fn test_lookup_preference_tie_break() {
        let tables = tables_with_shared_name();
        let (arr, association) = tables.lookup("a", FieldAssociation::Cell).unwrap();
        assert_eq!(association, FieldAssociation::Cell);
        assert_eq!(arr.values(), &[2.0, 2.0]);

        let (arr, association) = tables.lookup("a", FieldAssociation::Point).unwrap();
        assert_eq!(association, FieldAssociation::Point);
        assert_eq!(arr.values(), &[1.0, 1.0]);
    }

    #[test]
    fn test_lookup_ignores_preference_for_single_holder() {
        let tables = tables_with_shared_name();
        let (_, association) = tables.lookup("meta", FieldAssociation::Point).unwrap();
        assert_eq!(association, FieldAssociation::None);

        // preference table lacks the name: first holder in point, cell, field order
        let (_, association) = tables.lookup("a", FieldAssociation::None).unwrap();
        assert_eq!(association, FieldAssociation::Point);
    }

    #[test]
    fn test_lookup_missing() {
        let tables = tables_with_shared_name();
        assert!(matches!(
            tables.lookup("nope", FieldAssociation::Cell),
            Err(MeshDataError::ArrayNotFound(name)) if name == "nope"
        ));
    }
}
