//! Training-time feature order

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::encoding::{is_encoded_feature, Axis};

/// The versioned column sequence the classifier expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureOrder {
    version: String,
    features: Vec<String>,
}

impl FeatureOrder {
    pub fn new(version: impl Into<String>, features: Vec<String>) -> Self {
        Self {
            version: version.into(),
            features,
        }
    }

    /// Checks the order against the columns assembly can produce.
    ///
    /// The order must be non-empty and duplicate-free, carry each axis's
    /// encoded column exactly once, and carry no other encoded column.
    pub fn validate(&self) -> Result<(), String> {
        if self.version.trim().is_empty() {
            return Err("feature order has no version".into());
        }
        if self.features.is_empty() {
            return Err("feature order is empty".into());
        }

        let mut seen = HashSet::with_capacity(self.features.len());
        for name in &self.features {
            if name.trim().is_empty() {
                return Err("feature order contains an empty name".into());
            }
            if !seen.insert(name.as_str()) {
                return Err(format!("duplicate feature '{}'", name));
            }
            if is_encoded_feature(name) && Axis::from_feature_name(name).is_none() {
                return Err(format!(
                    "feature '{}' is encoded but no axis produces it",
                    name
                ));
            }
        }

        for axis in Axis::ALL {
            if !seen.contains(axis.feature_name()) {
                return Err(format!(
                    "feature order lacks the {} column '{}'",
                    axis,
                    axis.feature_name()
                ));
            }
        }

        Ok(())
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Column names in order
    pub fn names(&self) -> &[String] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.features.iter().any(|f| f == name)
    }

    /// Columns filled from numeric inputs, in order
    pub fn numeric_features(&self) -> impl Iterator<Item = &str> {
        self.features
            .iter()
            .map(String::as_str)
            .filter(|name| !is_encoded_feature(name))
    }
}
