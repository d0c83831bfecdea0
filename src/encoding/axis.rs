//! Categorical axes and per-axis containers

use std::fmt;

use serde::{Deserialize, Serialize};

/// Suffix carried by every feature column that holds a category code
pub const ENCODED_SUFFIX: &str = "_encoded";

/// One categorical dimension of a formulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Active pharmaceutical ingredient
    Drug,
    /// Oil phase
    Oil,
    /// Surfactant
    Surfactant,
}

impl Axis {
    /// All axes, in the order they are encoded
    pub const ALL: [Axis; 3] = [Axis::Drug, Axis::Oil, Axis::Surfactant];

    /// Returns the lowercase axis name
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Drug => "drug",
            Axis::Oil => "oil",
            Axis::Surfactant => "surfactant",
        }
    }

    /// Returns the feature column that carries this axis's code
    pub fn feature_name(&self) -> &'static str {
        match self {
            Axis::Drug => "drug_encoded",
            Axis::Oil => "oil_encoded",
            Axis::Surfactant => "surfactant_encoded",
        }
    }

    /// Maps an encoded feature column back to its axis
    pub fn from_feature_name(name: &str) -> Option<Axis> {
        Self::ALL.into_iter().find(|axis| axis.feature_name() == name)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returns true if the feature name designates a category code column
pub fn is_encoded_feature(name: &str) -> bool {
    name.ends_with(ENCODED_SUFFIX)
}

/// One value per axis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerAxis<T> {
    pub drug: T,
    pub oil: T,
    pub surfactant: T,
}

impl<T> PerAxis<T> {
    pub fn new(drug: T, oil: T, surfactant: T) -> Self {
        Self {
            drug,
            oil,
            surfactant,
        }
    }

    /// Returns the value for the given axis
    pub fn get(&self, axis: Axis) -> &T {
        match axis {
            Axis::Drug => &self.drug,
            Axis::Oil => &self.oil,
            Axis::Surfactant => &self.surfactant,
        }
    }

    /// Iterates values in `Axis::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = (Axis, &T)> {
        Axis::ALL.into_iter().map(move |axis| (axis, self.get(axis)))
    }
}
