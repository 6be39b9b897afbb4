//! Active array selection on datasets.

use meshdata_core::{ActiveArrayInfo, AttributeSource, DataArray, FieldAssociation, Result};

use super::DataSet;

impl DataSet {
    /// Returns the active scalars' association and name.
    ///
    /// A stale or missing selection is re-resolved against the current
    /// tables, so this may update the recorded selection.
    pub fn active_scalars_info(&mut self) -> ActiveArrayInfo {
        self.registry.active_scalars_info(&mut self.arrays)
    }

    /// Returns the active vectors' association and name.
    pub fn active_vectors_info(&mut self) -> ActiveArrayInfo {
        self.registry.active_vectors_info(&mut self.arrays)
    }

    /// Returns the active tensors' association and name.
    #[must_use]
    pub fn active_tensors_info(&self) -> &ActiveArrayInfo {
        self.registry.active_tensors_info()
    }

    /// Returns the name of the active scalars.
    pub fn active_scalars_name(&mut self) -> Option<String> {
        self.active_scalars_info().name
    }

    /// Returns the name of the active vectors.
    pub fn active_vectors_name(&mut self) -> Option<String> {
        self.active_vectors_info().name
    }

    /// Returns the name of the active tensors.
    #[must_use]
    pub fn active_tensors_name(&self) -> Option<&str> {
        self.active_tensors_info().name()
    }

    /// Returns the active scalars array.
    pub fn active_scalars(&mut self) -> Option<&DataArray> {
        let info = self.active_scalars_info();
        self.resolve(&info)
    }

    /// Returns the active vectors array.
    pub fn active_vectors(&mut self) -> Option<&DataArray> {
        let info = self.active_vectors_info();
        self.resolve(&info)
    }

    /// Returns the active tensors array.
    #[must_use]
    pub fn active_tensors(&self) -> Option<&DataArray> {
        self.resolve(self.active_tensors_info())
    }

    /// Sets the active scalars; `None` clears them.
    ///
    /// `preference` picks the table when `name` exists in several.
    pub fn set_active_scalars(
        &mut self,
        name: Option<&str>,
        preference: FieldAssociation,
    ) -> Result<()> {
        self.registry
            .set_active_scalars(&mut self.arrays, name, preference)
    }

    /// Sets the active vectors; `None` clears them.
    pub fn set_active_vectors(
        &mut self,
        name: Option<&str>,
        preference: FieldAssociation,
    ) -> Result<()> {
        self.registry
            .set_active_vectors(&mut self.arrays, name, preference)
    }

    /// Sets the active tensors; `None` clears them.
    pub fn set_active_tensors(
        &mut self,
        name: Option<&str>,
        preference: FieldAssociation,
    ) -> Result<()> {
        self.registry
            .set_active_tensors(&mut self.arrays, name, preference)
    }

    /// Renames an array found by searching point, cell and field data.
    ///
    /// If the array was the active scalars it stays active under its new name.
    pub fn rename_array(
        &mut self,
        old_name: &str,
        new_name: &str,
        preference: FieldAssociation,
    ) -> Result<()> {
        self.registry
            .rename_array(&mut self.arrays, old_name, new_name, preference)
    }

    fn resolve(&self, info: &ActiveArrayInfo) -> Option<&DataArray> {
        let name = info.name()?;
        if !info.association.is_attribute() {
            return None;
        }
        self.arrays.attributes(info.association).get(name)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use meshdata_core::{AttributeRole, MeshDataError};

    use super::*;

    fn triangle() -> DataSet {
        DataSet::new(vec![Vec3::ZERO, Vec3::X, Vec3::Y], 1)
    }

    #[test]
    fn test_active_scalars_array() {
        let mut ds = triangle();
        assert!(ds.active_scalars().is_none());
        ds.set_array("z", vec![0.0, 1.0, 2.0]).unwrap();
        assert_eq!(ds.active_scalars().unwrap().values(), &[0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_active_vectors_array() {
        let mut ds = triangle();
        ds.set_array("velocity", vec![Vec3::X, Vec3::Y, Vec3::Z])
            .unwrap();
        ds.set_active_vectors(Some("velocity"), FieldAssociation::Point)
            .unwrap();
        assert_eq!(ds.active_vectors().unwrap().shape(), (3, 3));
        assert_eq!(ds.active_vectors_name().as_deref(), Some("velocity"));
        assert_eq!(
            ds.point_arrays().active_name(AttributeRole::Vectors),
            Some("velocity")
        );
    }

    #[test]
    fn test_stale_vectors_yield_no_array() {
        let mut ds = triangle();
        ds.set_array("velocity", vec![Vec3::X, Vec3::Y, Vec3::Z])
            .unwrap();
        ds.set_active_vectors(Some("velocity"), FieldAssociation::Point)
            .unwrap();
        ds.point_arrays_mut().remove("velocity");
        assert!(ds.active_vectors().is_none());
    }

    #[test]
    fn test_active_tensors() {
        let mut ds = triangle();
        let stress = DataArray::from_flat(vec![0.0; 9], 9).unwrap();
        ds.cell_arrays_mut().set("stress", stress).unwrap();
        assert_eq!(ds.active_tensors_name(), None);
        ds.set_active_tensors(Some("stress"), FieldAssociation::Point)
            .unwrap();
        assert_eq!(ds.active_tensors_name(), Some("stress"));
        assert_eq!(ds.active_tensors_info().association, FieldAssociation::Cell);
        assert!(ds.active_tensors().is_some());
    }

    #[test]
    fn test_rename_through_dataset() {
        let mut ds = triangle();
        ds.set_array("old", vec![0.0; 3]).unwrap();
        ds.rename_array("old", "new", FieldAssociation::Cell).unwrap();
        assert_eq!(ds.active_scalars_name().as_deref(), Some("new"));
        assert!(matches!(
            ds.rename_array("old", "again", FieldAssociation::Cell),
            Err(MeshDataError::ArrayNotFound(_))
        ));
    }
}
