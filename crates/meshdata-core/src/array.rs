//! Numeric data arrays stored in attribute tables.

use glam::Vec3;

use crate::error::{MeshDataError, Result};

/// An ordered sequence of fixed-width numeric tuples.
///
/// Values are stored flat; the array length is the number of tuples.
#[derive(Debug, Clone, PartialEq)]
pub struct DataArray {
    values: Vec<f64>,
    n_components: usize,
}

impl DataArray {
    /// Creates a single-component array.
    pub fn from_scalars(values: Vec<f64>) -> Self {
        Self {
            values,
            n_components: 1,
        }
    }

    /// Creates a three-component array from vectors.
    pub fn from_vec3(vectors: &[Vec3]) -> Self {
        let values = vectors
            .iter()
            .flat_map(|v| [f64::from(v.x), f64::from(v.y), f64::from(v.z)])
            .collect();
        Self {
            values,
            n_components: 3,
        }
    }

    /// Creates an array from flat values and a component count.
    ///
    /// Fails if `n_components` is zero or does not divide the number of values.
    pub fn from_flat(values: Vec<f64>, n_components: usize) -> Result<Self> {
        if n_components == 0 {
            return Err(MeshDataError::TypeMismatch(
                "arrays need at least one component".to_string(),
            ));
        }
        if values.len() % n_components != 0 {
            return Err(MeshDataError::TypeMismatch(format!(
                "{} values cannot be split into tuples of {n_components}",
                values.len()
            )));
        }
        Ok(Self {
            values,
            n_components,
        })
    }

    /// Creates an array from explicit tuples.
    ///
    /// All tuples must have the same non-zero width.
    pub fn from_tuples(tuples: Vec<Vec<f64>>) -> Result<Self> {
        let Some(width) = tuples.first().map(Vec::len) else {
            return Ok(Self::from_scalars(Vec::new()));
        };
        if width == 0 {
            return Err(MeshDataError::TypeMismatch(
                "arrays need at least one component".to_string(),
            ));
        }
        if let Some(bad) = tuples.iter().position(|t| t.len() != width) {
            return Err(MeshDataError::TypeMismatch(format!(
                "tuple {bad} has {} components, expected {width}",
                tuples[bad].len()
            )));
        }
        Ok(Self {
            values: tuples.into_iter().flatten().collect(),
            n_components: width,
        })
    }

    /// Returns the number of tuples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len() / self.n_components
    }

    /// Returns true if the array holds no tuples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the number of components per tuple.
    #[must_use]
    pub fn n_components(&self) -> usize {
        self.n_components
    }

    /// Returns the flat values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the tuple at `index`, if in bounds.
    #[must_use]
    pub fn tuple(&self, index: usize) -> Option<&[f64]> {
        let start = index.checked_mul(self.n_components)?;
        let end = start.checked_add(self.n_components)?;
        self.values.get(start..end)
    }

    /// Iterates over the tuples in order.
    pub fn tuples(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks_exact(self.n_components)
    }

    /// Returns the shape as `(tuples, components)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.len(), self.n_components)
    }

    /// Returns the non-NaN minimum and maximum over all values.
    ///
    /// Both bounds are NaN when the array is empty or entirely NaN.
    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.values
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
            .unwrap_or((f64::NAN, f64::NAN))
    }
}

impl From<Vec<f64>> for DataArray {
    fn from(values: Vec<f64>) -> Self {
        Self::from_scalars(values)
    }
}

impl From<Vec<Vec3>> for DataArray {
    fn from(vectors: Vec<Vec3>) -> Self {
        Self::from_vec3(&vectors)
    }
}
