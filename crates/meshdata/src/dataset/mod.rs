//! Dataset structure.

mod active;
mod textures;

pub use textures::TCOORDS_ARRAY;

use std::fmt;

use glam::Vec3;
use meshdata_core::{
    ArrayRegistry, AttributeRole, AttributeSource, AttributeTables, DataArray, DataSetAttributes,
    FieldAssociation, MeshDataError, RegistryOptions, Result, Texture,
};

/// A dataset: points plus named arrays on points, cells and the dataset itself.
///
/// Cell topology is not stored, only the cell count that cell arrays must match.
#[derive(Debug, Clone)]
pub struct DataSet {
    points: Vec<Vec3>,
    n_cells: usize,
    arrays: AttributeTables,
    registry: ArrayRegistry,
    textures: Vec<(String, Texture)>,
}

impl DataSet {
    /// Creates a dataset with the given points and cell count.
    pub fn new(points: Vec<Vec3>, n_cells: usize) -> Self {
        Self::with_options(points, n_cells, RegistryOptions::default())
    }

    /// Creates a dataset whose active-array registry uses `options`.
    pub fn with_options(points: Vec<Vec3>, n_cells: usize, options: RegistryOptions) -> Self {
        Self {
            arrays: AttributeTables::new(points.len(), n_cells),
            points,
            n_cells,
            registry: ArrayRegistry::with_options(options),
            textures: Vec::new(),
        }
    }

    /// Returns the number of points.
    #[must_use]
    pub fn n_points(&self) -> usize {
        self.points.len()
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn n_cells(&self) -> usize {
        self.n_cells
    }

    /// Returns the points.
    #[must_use]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Replaces the point positions.
    ///
    /// The point count may only change while no point arrays exist.
    pub fn set_points(&mut self, points: Vec<Vec3>) -> Result<()> {
        self.arrays.point.set_expected_len(Some(points.len()))?;
        self.points = points;
        Ok(())
    }

    /// Returns the axis-aligned bounding box, or `None` without points.
    #[must_use]
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        if self.points.is_empty() {
            return None;
        }

        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);
        for &p in &self.points {
            min = min.min(p);
            max = max.max(p);
        }
        Some((min, max))
    }

    /// Returns the center of the bounding box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.bounds()
            .map_or(Vec3::ZERO, |(min, max)| (min + max) * 0.5)
    }

    /// Returns the length of the bounding box diagonal.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.bounds().map_or(0.0, |(min, max)| (max - min).length())
    }

    /// Returns the point arrays.
    #[must_use]
    pub fn point_arrays(&self) -> &DataSetAttributes {
        &self.arrays.point
    }

    /// Returns the mutable point arrays.
    pub fn point_arrays_mut(&mut self) -> &mut DataSetAttributes {
        &mut self.arrays.point
    }

    /// Returns the cell arrays.
    #[must_use]
    pub fn cell_arrays(&self) -> &DataSetAttributes {
        &self.arrays.cell
    }

    /// Returns the mutable cell arrays.
    pub fn cell_arrays_mut(&mut self) -> &mut DataSetAttributes {
        &mut self.arrays.cell
    }

    /// Returns the field arrays.
    #[must_use]
    pub fn field_arrays(&self) -> &DataSetAttributes {
        &self.arrays.field
    }

    /// Returns the mutable field arrays.
    pub fn field_arrays_mut(&mut self) -> &mut DataSetAttributes {
        &mut self.arrays.field
    }

    /// Removes all point arrays.
    pub fn clear_point_arrays(&mut self) {
        self.arrays.point.clear();
    }

    /// Removes all cell arrays.
    pub fn clear_cell_arrays(&mut self) {
        self.arrays.cell.clear();
    }

    /// Removes all field arrays.
    pub fn clear_field_arrays(&mut self) {
        self.arrays.field.clear();
    }

    /// Removes all arrays from point, cell and field data.
    pub fn clear_arrays(&mut self) {
        self.clear_point_arrays();
        self.clear_cell_arrays();
        self.clear_field_arrays();
    }

    /// Adds or replaces an array, placing it by length.
    ///
    /// Arrays matching the point count go to point data (checked first, so
    /// vertex-only meshes keep data on points), then arrays matching the
    /// cell count go to cell data. Field data must be set explicitly through
    /// [`field_arrays_mut`](Self::field_arrays_mut).
    ///
    /// A newly added array that can hold scalars becomes the active scalars.
    pub fn set_array(&mut self, name: &str, array: impl Into<DataArray>) -> Result<()> {
        let array = array.into();
        let association = if array.len() == self.n_points() {
            FieldAssociation::Point
        } else if array.len() == self.n_cells {
            FieldAssociation::Cell
        } else {
            return Err(MeshDataError::SizeMismatch {
                expected: self.n_points(),
                actual: array.len(),
            });
        };

        let activate = AttributeRole::Scalars.accepts_components(array.n_components())
            && !self.registry.options().is_reserved(name);
        let replaced = self.arrays.attributes_mut(association).set(name, array)?;
        if replaced.is_none() && activate {
            self.registry
                .set_active_scalars(&mut self.arrays, Some(name), association)?;
        }
        Ok(())
    }

    /// Gets an array by name, searching point, cell and field data.
    pub fn get_array(&self, name: &str, preference: FieldAssociation) -> Result<&DataArray> {
        self.arrays.lookup(name, preference).map(|(arr, _)| arr)
    }

    /// Gets an array and the association it was found in.
    pub fn get_array_info(
        &self,
        name: &str,
        preference: FieldAssociation,
    ) -> Result<(&DataArray, FieldAssociation)> {
        self.arrays.lookup(name, preference)
    }

    /// Returns the number of arrays over point, cell and field data.
    #[must_use]
    pub fn n_arrays(&self) -> usize {
        self.arrays.n_arrays()
    }

    /// Returns all array names, field then point then cell, with the active
    /// scalars name moved to the front.
    pub fn array_names(&mut self) -> Vec<String> {
        let mut names: Vec<String> = self
            .arrays
            .field
            .keys()
            .chain(self.arrays.point.keys())
            .chain(self.arrays.cell.keys())
            .map(str::to_string)
            .collect();
        if let Some(active) = self.active_scalars_name() {
            if let Some(idx) = names.iter().position(|n| *n == active) {
                let name = names.remove(idx);
                names.insert(0, name);
            }
        }
        names
    }

    /// Returns the non-NaN range of an array.
    ///
    /// With `name` set to `None` the active scalars are used, and a dataset
    /// without active scalars yields a NaN range.
    pub fn get_data_range(
        &mut self,
        name: Option<&str>,
        preference: FieldAssociation,
    ) -> Result<(f64, f64)> {
        let name = match name {
            Some(name) => name.to_string(),
            None => match self.active_scalars_name() {
                Some(name) => name,
                None => return Ok((f64::NAN, f64::NAN)),
            },
        };
        Ok(self.get_array(&name, preference)?.range())
    }

    /// Copies active-array selections and textures from another dataset.
    pub fn copy_meta_from(&mut self, other: &DataSet) {
        self.registry.copy_meta_from(&other.registry);
        self.textures.clone_from(&other.textures);
    }

    /// Returns the active-array registry.
    #[must_use]
    pub fn registry(&self) -> &ArrayRegistry {
        &self.registry
    }
}

impl fmt::Display for DataSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DataSet")?;
        writeln!(f, "  N Cells    : {}", self.n_cells)?;
        writeln!(f, "  N Points   : {}", self.n_points())?;
        let (min, max) = self.bounds().unwrap_or((Vec3::ZERO, Vec3::ZERO));
        writeln!(f, "  X Bounds   : {:.3e}, {:.3e}", min.x, max.x)?;
        writeln!(f, "  Y Bounds   : {:.3e}, {:.3e}", min.y, max.y)?;
        writeln!(f, "  Z Bounds   : {:.3e}, {:.3e}", min.z, max.z)?;
        write!(f, "  N Arrays   : {}", self.n_arrays())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> DataSet {
        let points = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 2.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
        ];
        DataSet::new(points, 2)
    }

    #[test]
    fn test_geometry() {
        let ds = quad();
        assert_eq!(ds.n_points(), 4);
        assert_eq!(ds.n_cells(), 2);
        assert_eq!(ds.bounds(), Some((Vec3::ZERO, Vec3::new(1.0, 2.0, 0.0))));
        assert_eq!(ds.center(), Vec3::new(0.5, 1.0, 0.0));
        assert!((ds.length() - 5.0_f32.sqrt()).abs() < 1e-6);

        let empty = DataSet::new(Vec::new(), 0);
        assert_eq!(empty.bounds(), None);
        assert_eq!(empty.length(), 0.0);
    }

    #[test]
    fn test_set_array_places_by_length() {
        let mut ds = quad();
        ds.set_array("on_points", vec![0.0; 4]).unwrap();
        ds.set_array("on_cells", vec![0.0; 2]).unwrap();
        assert!(ds.point_arrays().contains("on_points"));
        assert!(ds.cell_arrays().contains("on_cells"));
        assert!(matches!(
            ds.set_array("odd", vec![0.0; 3]),
            Err(MeshDataError::SizeMismatch {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_points_win_when_counts_match() {
        let mut ds = DataSet::new(vec![Vec3::ZERO, Vec3::X], 2);
        ds.set_array("ids", vec![0.0, 1.0]).unwrap();
        assert!(ds.point_arrays().contains("ids"));
        assert!(!ds.cell_arrays().contains("ids"));
    }

    #[test]
    fn test_new_array_becomes_active_scalars() {
        let mut ds = quad();
        ds.set_array("first", vec![0.0; 4]).unwrap();
        ds.set_array("second", vec![0.0; 2]).unwrap();
        assert_eq!(ds.active_scalars_name().as_deref(), Some("second"));

        // replacing an existing array leaves the selection alone
        ds.set_array("first", vec![1.0; 4]).unwrap();
        assert_eq!(ds.active_scalars_name().as_deref(), Some("second"));
    }

    #[test]
    fn test_set_points_keeps_count_with_arrays() {
        let mut ds = quad();
        ds.set_points(vec![Vec3::ONE; 3]).unwrap();
        assert_eq!(ds.n_points(), 3);

        ds.set_array("height", vec![0.0; 3]).unwrap();
        assert!(ds.set_points(vec![Vec3::ONE; 5]).is_err());
        assert_eq!(ds.n_points(), 3);
        ds.set_points(vec![Vec3::ZERO; 3]).unwrap();
    }

    #[test]
    fn test_array_names_put_active_first() {
        let mut ds = quad();
        ds.field_arrays_mut().set("meta", vec![1.0].into()).unwrap();
        ds.set_array("a", vec![0.0; 4]).unwrap();
        ds.set_array("b", vec![0.0; 4]).unwrap();
        ds.set_active_scalars(Some("a"), FieldAssociation::Point)
            .unwrap();
        assert_eq!(ds.array_names(), vec!["a", "meta", "b"]);
        assert_eq!(ds.n_arrays(), 3);
    }

    #[test]
    fn test_data_range() {
        let mut ds = quad();
        assert!(ds
            .get_data_range(None, FieldAssociation::Cell)
            .unwrap()
            .0
            .is_nan());

        ds.set_array("h", vec![3.0, f64::NAN, -2.0, 1.0]).unwrap();
        assert_eq!(
            ds.get_data_range(None, FieldAssociation::Cell).unwrap(),
            (-2.0, 3.0)
        );
        assert!(matches!(
            ds.get_data_range(Some("missing"), FieldAssociation::Cell),
            Err(MeshDataError::ArrayNotFound(_))
        ));
    }

    #[test]
    fn test_clear_arrays() {
        let mut ds = quad();
        ds.set_array("p", vec![0.0; 4]).unwrap();
        ds.set_array("c", vec![0.0; 2]).unwrap();
        ds.field_arrays_mut().set("f", vec![0.0].into()).unwrap();
        ds.clear_arrays();
        assert_eq!(ds.n_arrays(), 0);
        assert_eq!(ds.active_scalars_info().name, None);
    }

    #[test]
    fn test_display_summary() {
        let ds = quad();
        let text = ds.to_string();
        assert!(text.contains("N Points   : 4"));
        assert!(text.contains("N Cells    : 2"));
    }
}
