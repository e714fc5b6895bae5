use std::collections::HashSet;

use derive_more::Deref;

use crate::Unit;

/// One physically available increment of resistance for an exercise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadEntry {
    value: f64,
    unit: Unit,
}

impl LoadEntry {
    pub fn new(value: f64, unit: Unit) -> Result<Self, LoadError> {
        if !value.is_finite() {
            return Err(LoadError::NotFinite);
        }

        if value <= 0.0 {
            return Err(LoadError::NotPositive(value));
        }

        Ok(Self { value, unit })
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn unit(&self) -> Unit {
        self.unit
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum LoadError {
    #[error("Load must be a finite number")]
    NotFinite,
    #[error("Load must be greater than zero ({0} <= 0)")]
    NotPositive(f64),
}

/// Loadable weights for one exercise in one unit, unique by value and in ascending order.
///
/// A catalog is never modified. A change of exercise or unit produces a new one.
#[derive(Deref, Debug, Default, Clone, PartialEq)]
pub struct LoadCatalog(Vec<LoadEntry>);

impl LoadCatalog {
    /// Collapses entries with the same value, keeping the first one seen, and sorts the result.
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = LoadEntry>) -> Self {
        let mut seen = HashSet::new();
        let mut unique = entries
            .into_iter()
            .filter(|entry| seen.insert(entry.value.to_bits()))
            .collect::<Vec<_>>();
        unique.sort_by(|a, b| a.value.total_cmp(&b.value));
        Self(unique)
    }

    #[must_use]
    pub fn empty() -> Self {
        Self(vec![])
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().map(LoadEntry::value)
    }
}

impl FromIterator<LoadEntry> for LoadCatalog {
    fn from_iter<T: IntoIterator<Item = LoadEntry>>(iter: T) -> Self {
        Self::new(iter)
    }
}
