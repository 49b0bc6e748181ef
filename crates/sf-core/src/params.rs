//! Named numeric parameters referenced from constraints.

use std::collections::BTreeMap;

use crate::Real;

/// Immutable set of named numeric constants.
///
/// Supplied externally (e.g. from a project file) and never modified
/// during a solve. `BTreeMap` keeps iteration deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters {
    values: BTreeMap<String, Real>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: Real) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<Real> {
        self.values.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Real)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(String, Real)> for Parameters {
    fn from_iter<T: IntoIterator<Item = (String, Real)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
