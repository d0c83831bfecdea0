//! Ordered feature vector

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Feature name to value, in feature-order sequence.
///
/// Only assembly creates vectors, so a vector always covers its bundle's
/// feature order exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    entries: Vec<(String, f64)>,
}

impl FeatureVector {
    pub(crate) fn from_entries(entries: Vec<(String, f64)>) -> Self {
        Self { entries }
    }

    /// Names in row order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// The classifier input row
    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|(_, value)| *value).collect()
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Serialized as a JSON object whose key order is the row order.
impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
