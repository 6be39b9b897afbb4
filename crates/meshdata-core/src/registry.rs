//! Active-array registry.
//!
//! An [`ArrayRegistry`] records, per dataset, which array is active for the
//! scalars, vectors and tensors roles. Scalars resolve lazily: a stale or
//! missing selection is replaced by the first non-reserved array found in
//! the point table, then the cell table.

use crate::active::ActiveArrayInfo;
use crate::association::{AttributeRole, FieldAssociation};
use crate::error::{MeshDataError, Result};
use crate::options::{NormalsAdoption, RegistryOptions};
use crate::source::AttributeSource;

/// Point array adopted as active vectors when none are recorded.
pub const NORMALS_ARRAY: &str = "Normals";

/// Tracks the active scalars, vectors and tensors of one dataset.
#[derive(Debug, Clone, Default)]
pub struct ArrayRegistry {
    options: RegistryOptions,
    scalars: ActiveArrayInfo,
    vectors: ActiveArrayInfo,
    tensors: ActiveArrayInfo,
    /// Active scalars name before the most recent explicit selection.
    last_active_scalars: Option<String>,
    /// Whether active vectors were ever set or cleared by a caller.
    vectors_explicit: bool,
}

impl ArrayRegistry {
    /// Creates a registry with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the given options.
    pub fn with_options(options: RegistryOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Returns the options.
    #[must_use]
    pub fn options(&self) -> &RegistryOptions {
        &self.options
    }

    /// Returns the name recorded as the previous active scalars.
    #[must_use]
    pub fn last_active_scalars_name(&self) -> Option<&str> {
        self.last_active_scalars.as_deref()
    }

    /// Resolves and returns the active scalars.
    ///
    /// A reserved recorded name is replaced by the last explicitly chosen
    /// name. The result is pushed into its table again on every call, so a
    /// table whose pointer drifted after a mutation is brought back in line.
    /// If the name is absent, no longer in the point or cell table, or
    /// rejected by the table, the first non-reserved array of the point
    /// table, then the cell table, becomes active. With no candidate the
    /// record reports no active scalars, keeps its association, and any
    /// scalars pointer left in the tables is cleared.
    pub fn active_scalars_info<S>(&mut self, source: &mut S) -> ActiveArrayInfo
    where
        S: AttributeSource + ?Sized,
    {
        let mut name = self.scalars.name.clone();
        if name.as_deref().is_some_and(|n| self.options.is_reserved(n)) {
            name.clone_from(&self.last_active_scalars);
        }

        if let Some(name) = name {
            let located = locate_attribute(&*source, &name, self.scalars.association);
            if let Some(association) = located {
                let in_sync = source
                    .attributes(association)
                    .active_name(AttributeRole::Scalars)
                    == Some(name.as_str());
                if in_sync
                    || source.apply_active(AttributeRole::Scalars, association, Some(&name)) >= 0
                {
                    self.scalars = ActiveArrayInfo::new(association, name);
                    return self.scalars.clone();
                }
                log::debug!("{association} array '{name}' can no longer hold active scalars");
            }
        }

        self.scalars = match self.first_eligible_scalars(source) {
            Some(info) => info,
            None => {
                log::debug!("no eligible array for active scalars");
                for association in [FieldAssociation::Point, FieldAssociation::Cell] {
                    if source
                        .attributes(association)
                        .active_name(AttributeRole::Scalars)
                        .is_some()
                    {
                        source.apply_active(AttributeRole::Scalars, association, None);
                    }
                }
                ActiveArrayInfo::inactive(self.scalars.association)
            }
        };
        self.scalars.clone()
    }

    /// Returns the active vectors, adopting a `"Normals"` point array when
    /// none are recorded and the adoption policy allows it.
    pub fn active_vectors_info<S>(&mut self, source: &mut S) -> ActiveArrayInfo
    where
        S: AttributeSource + ?Sized,
    {
        let may_adopt = match self.options.normals_adoption {
            NormalsAdoption::WhileUnset => true,
            NormalsAdoption::UntilExplicitlySet => !self.vectors_explicit,
        };
        if self.vectors.name.is_none()
            && may_adopt
            && source
                .attributes(FieldAssociation::Point)
                .contains(NORMALS_ARRAY)
        {
            let status = source.apply_active(
                AttributeRole::Vectors,
                FieldAssociation::Point,
                Some(NORMALS_ARRAY),
            );
            if status >= 0 {
                log::debug!("adopted '{NORMALS_ARRAY}' as active vectors");
                self.vectors = ActiveArrayInfo::new(FieldAssociation::Point, NORMALS_ARRAY);
            }
        }
        self.vectors.clone()
    }

    /// Returns the recorded active tensors.
    #[must_use]
    pub fn active_tensors_info(&self) -> &ActiveArrayInfo {
        &self.tensors
    }

    /// Sets the active scalars, or clears them when `name` is `None`.
    ///
    /// `preference` breaks ties when `name` exists in several tables.
    pub fn set_active_scalars<S>(
        &mut self,
        source: &mut S,
        name: Option<&str>,
        preference: FieldAssociation,
    ) -> Result<()>
    where
        S: AttributeSource + ?Sized,
    {
        let Some(name) = name else {
            self.scalars = activate(source, AttributeRole::Scalars, None, preference)?;
            return Ok(());
        };

        // Resolving may move table pointers; restore them if activation fails.
        let saved_record = self.scalars.clone();
        let saved_pointers = [FieldAssociation::Point, FieldAssociation::Cell].map(|a| {
            source
                .attributes(a)
                .active_name(AttributeRole::Scalars)
                .map(str::to_string)
        });
        let previous = self.active_scalars_info(source).name;

        match activate(source, AttributeRole::Scalars, Some(name), preference) {
            Ok(info) => {
                self.scalars = info;
                if let Some(previous) = previous.filter(|p| !self.options.is_reserved(p)) {
                    self.last_active_scalars = Some(previous);
                }
                Ok(())
            }
            Err(err) => {
                let associations = [FieldAssociation::Point, FieldAssociation::Cell];
                for (association, pointer) in associations.into_iter().zip(saved_pointers) {
                    source.apply_active(AttributeRole::Scalars, association, pointer.as_deref());
                }
                self.scalars = saved_record;
                Err(err)
            }
        }
    }

    /// Sets the active vectors, or clears them when `name` is `None`.
    pub fn set_active_vectors<S>(
        &mut self,
        source: &mut S,
        name: Option<&str>,
        preference: FieldAssociation,
    ) -> Result<()>
    where
        S: AttributeSource + ?Sized,
    {
        self.vectors = activate(source, AttributeRole::Vectors, name, preference)?;
        self.vectors_explicit = true;
        Ok(())
    }

    /// Sets the active tensors, or clears them when `name` is `None`.
    pub fn set_active_tensors<S>(
        &mut self,
        source: &mut S,
        name: Option<&str>,
        preference: FieldAssociation,
    ) -> Result<()>
    where
        S: AttributeSource + ?Sized,
    {
        self.tensors = activate(source, AttributeRole::Tensors, name, preference)?;
        Ok(())
    }

    /// Renames an array, keeping it active if it was the active scalars.
    ///
    /// The array is found with the same point/cell/field preference rule as
    /// activation. Field data can be renamed but is never active.
    pub fn rename_array<S>(
        &mut self,
        source: &mut S,
        old_name: &str,
        new_name: &str,
        preference: FieldAssociation,
    ) -> Result<()>
    where
        S: AttributeSource + ?Sized,
    {
        let (_, association) = source.lookup(old_name, preference)?;
        let was_active = association.is_attribute() && {
            let info = self.active_scalars_info(source);
            info.association == association && info.name() == Some(old_name)
        };

        source.attributes_mut(association).rename(old_name, new_name)?;
        log::debug!("renamed {association} array '{old_name}' to '{new_name}'");

        for info in [&mut self.vectors, &mut self.tensors] {
            if info.association == association && info.name() == Some(old_name) {
                *info = ActiveArrayInfo::new(association, new_name);
            }
        }

        if was_active {
            self.scalars = ActiveArrayInfo::new(association, new_name);
            self.set_active_scalars(source, Some(new_name), association)?;
        }
        Ok(())
    }

    /// Copies the scalars and vectors selections from another registry.
    pub fn copy_meta_from(&mut self, other: &ArrayRegistry) {
        self.scalars = other.scalars.clone();
        self.vectors = other.vectors.clone();
        self.last_active_scalars.clone_from(&other.last_active_scalars);
        self.vectors_explicit = other.vectors_explicit;
    }

    fn first_eligible_scalars<S>(&self, source: &mut S) -> Option<ActiveArrayInfo>
    where
        S: AttributeSource + ?Sized,
    {
        for association in [FieldAssociation::Point, FieldAssociation::Cell] {
            let candidates: Vec<String> = source
                .attributes(association)
                .keys()
                .filter(|n| !self.options.is_reserved(n))
                .map(str::to_string)
                .collect();
            for name in candidates {
                if source.apply_active(AttributeRole::Scalars, association, Some(&name)) >= 0 {
                    log::debug!("resolved active scalars to {association} array '{name}'");
                    return Some(ActiveArrayInfo::new(association, name));
                }
            }
        }
        None
    }
}

/// Finds which attribute table holds `name`, trying `recorded` first.
fn locate_attribute<S>(
    source: &S,
    name: &str,
    recorded: FieldAssociation,
) -> Option<FieldAssociation>
where
    S: AttributeSource + ?Sized,
{
    [recorded, FieldAssociation::Point, FieldAssociation::Cell]
        .into_iter()
        .filter(|a| a.is_attribute())
        .find(|a| source.attributes(*a).contains(name))
}

/// Pushes a selection for `role` into the source and returns the new record.
///
/// On error nothing in the source has changed.
fn activate<S>(
    source: &mut S,
    role: AttributeRole,
    name: Option<&str>,
    preference: FieldAssociation,
) -> Result<ActiveArrayInfo>
where
    S: AttributeSource + ?Sized,
{
    let Some(name) = name else {
        source.apply_active(role, FieldAssociation::Cell, None);
        source.apply_active(role, FieldAssociation::Point, None);
        return Ok(ActiveArrayInfo::inactive(FieldAssociation::Point));
    };

    let (_, association) = source.lookup(name, preference)?;
    if !association.is_attribute() {
        return Err(MeshDataError::InvalidField {
            name: name.to_string(),
            association,
        });
    }
    if source.apply_active(role, association, Some(name)) < 0 {
        return Err(MeshDataError::ActivationError {
            name: name.to_string(),
            association,
            role,
        });
    }
    Ok(ActiveArrayInfo::new(association, name))
}
