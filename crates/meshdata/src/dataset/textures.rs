//! Texture management on datasets.

use meshdata_core::{AttributeRole, DataArray, MeshDataError, Result, Texture, TextureSelector};

use super::DataSet;

/// Point array that holds texture coordinates set through [`DataSet::set_t_coords`].
pub const TCOORDS_ARRAY: &str = "TCoords";

impl DataSet {
    /// Returns the textures in insertion order.
    pub fn textures(&self) -> impl Iterator<Item = (&str, &Texture)> {
        self.textures.iter().map(|(n, t)| (n.as_str(), t))
    }

    /// Returns the number of textures.
    #[must_use]
    pub fn n_textures(&self) -> usize {
        self.textures.len()
    }

    /// Gets a texture by name.
    #[must_use]
    pub fn texture(&self, name: &str) -> Option<&Texture> {
        self.textures
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, t)| t)
    }

    /// Adds or replaces a texture. Replacing keeps its position.
    pub fn add_texture(&mut self, name: impl Into<String>, texture: Texture) {
        let name = name.into();
        match self.textures.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = texture,
            None => self.textures.push((name, texture)),
        }
    }

    /// Removes all textures.
    pub fn clear_textures(&mut self) {
        self.textures.clear();
    }

    /// Returns the active texture coordinates.
    #[must_use]
    pub fn t_coords(&self) -> Option<&DataArray> {
        self.arrays.point.active(AttributeRole::TCoords)
    }

    /// Stores texture coordinates as the `"TCoords"` point array and makes
    /// them active.
    pub fn set_t_coords(&mut self, t_coords: DataArray) -> Result<()> {
        if !matches!(t_coords.n_components(), 2 | 3) {
            return Err(MeshDataError::TypeMismatch(format!(
                "texture coordinates need 2 or 3 components, got {}",
                t_coords.n_components()
            )));
        }
        self.arrays.point.set(TCOORDS_ARRAY, t_coords)?;
        self.arrays
            .point
            .set_active(AttributeRole::TCoords, Some(TCOORDS_ARRAY));
        Ok(())
    }

    /// Selects a texture and activates its texture coordinates.
    ///
    /// When a point array shares the texture's name it becomes the active
    /// texture coordinates; the previous coordinates stay in the point table.
    /// Returns `None` (with a warning) when no texture matches.
    pub fn activate_texture<'a>(
        &mut self,
        selector: impl Into<TextureSelector<'a>>,
    ) -> Option<&Texture> {
        let name = match selector.into() {
            TextureSelector::Name(name) => name.to_string(),
            TextureSelector::First => self.nth_texture_name(0)?,
            TextureSelector::Index(idx) => {
                let idx = if idx >= self.textures.len() { 0 } else { idx };
                self.nth_texture_name(idx)?
            }
        };

        let Some(idx) = self.textures.iter().position(|(n, _)| *n == name) else {
            log::warn!("Texture ({name}) not associated with this dataset");
            return None;
        };

        if self.arrays.point.contains(&name)
            && self
                .arrays
                .point
                .set_active(AttributeRole::TCoords, Some(&name))
                < 0
        {
            log::warn!("Point array ({name}) cannot be used as texture coordinates");
        }
        Some(&self.textures[idx].1)
    }

    fn nth_texture_name(&self, idx: usize) -> Option<String> {
        let name = self.textures.get(idx).map(|(n, _)| n.clone());
        if name.is_none() {
            log::warn!("No textures associated with input mesh.");
        }
        name
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use image::RgbaImage;
    use meshdata_core::FieldAssociation;

    use super::*;

    fn textured() -> DataSet {
        let mut ds = DataSet::new(vec![Vec3::ZERO, Vec3::X, Vec3::Y], 1);
        ds.add_texture("earth", Texture::new(RgbaImage::new(8, 4)));
        ds.add_texture("moon", Texture::new(RgbaImage::new(2, 2)));
        ds
    }

    fn uv(n: usize) -> DataArray {
        DataArray::from_flat(vec![0.5; n * 2], 2).unwrap()
    }

    #[test]
    fn test_activate_by_name_swaps_t_coords() {
        let mut ds = textured();
        ds.set_t_coords(uv(3)).unwrap();
        ds.point_arrays_mut().set("moon", uv(3)).unwrap();

        let tex = ds.activate_texture("moon").unwrap();
        assert_eq!(tex.dimensions(), (2, 2));
        assert_eq!(
            ds.point_arrays().active_name(AttributeRole::TCoords),
            Some("moon")
        );
        assert!(ds.point_arrays().contains(TCOORDS_ARRAY));
    }

    #[test]
    fn test_activate_by_index() {
        let mut ds = textured();
        assert_eq!(ds.activate_texture(1_usize).unwrap().dimensions(), (2, 2));
        assert_eq!(
            ds.activate_texture(TextureSelector::First)
                .unwrap()
                .dimensions(),
            (8, 4)
        );
        // out of range falls back to the first texture
        assert_eq!(ds.activate_texture(9_usize).unwrap().dimensions(), (8, 4));
    }

    #[test]
    fn test_activate_missing() {
        let mut ds = textured();
        assert!(ds.activate_texture("mars").is_none());
        ds.clear_textures();
        assert_eq!(ds.n_textures(), 0);
        assert!(ds.activate_texture(TextureSelector::First).is_none());
    }

    #[test]
    fn test_set_t_coords_checks_components() {
        let mut ds = textured();
        assert!(matches!(
            ds.set_t_coords(DataArray::from_scalars(vec![0.0; 3])),
            Err(MeshDataError::TypeMismatch(_))
        ));
        ds.set_t_coords(uv(3)).unwrap();
        assert_eq!(ds.t_coords().unwrap().shape(), (3, 2));
    }

    #[test]
    fn test_t_coords_never_default_scalars() {
        let mut ds = textured();
        ds.set_t_coords(uv(3)).unwrap();
        assert_eq!(ds.active_scalars_info().name, None);
    }

    #[test]
    fn test_copy_meta_copies_textures_and_selection() {
        let mut source = textured();
        source.set_array("height", vec![0.0, 1.0, 2.0]).unwrap();

        let mut target = DataSet::new(vec![Vec3::ZERO, Vec3::X, Vec3::Y], 1);
        target.set_array("height", vec![5.0; 3]).unwrap();
        target.set_array("other", vec![1.0; 3]).unwrap();
        target.copy_meta_from(&source);

        assert_eq!(target.n_textures(), 2);
        assert!(target.texture("earth").is_some());
        assert_eq!(
            target.active_scalars_info(),
            meshdata_core::ActiveArrayInfo::new(FieldAssociation::Point, "height")
        );
    }
}
