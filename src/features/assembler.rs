//! Feature vector assembler

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::assets::AssetBundle;
use crate::encoding::{is_encoded_feature, Axis, CategoryEncoder, PerAxis, UnknownCategoryError};

use super::errors::SchemaMismatchError;
use super::order::FeatureOrder;
use super::vector::FeatureVector;

/// Value used for numeric features the user left unset
pub const DEFAULT_NUMERIC_VALUE: f64 = 0.0;

/// User-entered numeric features by name
pub type NumericInputs = BTreeMap<String, f64>;

/// One chosen label per axis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selections {
    pub drug: String,
    pub oil: String,
    pub surfactant: String,
}

impl Selections {
    pub fn new(
        drug: impl Into<String>,
        oil: impl Into<String>,
        surfactant: impl Into<String>,
    ) -> Self {
        Self {
            drug: drug.into(),
            oil: oil.into(),
            surfactant: surfactant.into(),
        }
    }

    /// Returns the label chosen for an axis
    pub fn get(&self, axis: Axis) -> &str {
        match axis {
            Axis::Drug => &self.drug,
            Axis::Oil => &self.oil,
            Axis::Surfactant => &self.surfactant,
        }
    }
}

/// Assembly failure: either a selection or the merged schema is wrong
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssembleError {
    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategoryError),

    #[error(transparent)]
    SchemaMismatch(#[from] SchemaMismatchError),
}

/// Builds the classifier input for one request.
///
/// # Errors
///
/// - `UnknownCategory` if a selection is outside its axis vocabulary
/// - `SchemaMismatch` if the merged inputs do not cover the feature order
///   exactly
pub fn assemble(
    selections: &Selections,
    numeric_inputs: &NumericInputs,
    bundle: &AssetBundle,
) -> Result<FeatureVector, AssembleError> {
    assemble_with(
        bundle.feature_order(),
        bundle.encoders(),
        selections,
        numeric_inputs,
    )
}

fn assemble_with(
    order: &FeatureOrder,
    encoders: &PerAxis<CategoryEncoder>,
    selections: &Selections,
    numeric_inputs: &NumericInputs,
) -> Result<FeatureVector, AssembleError> {
    let mut merged: HashMap<&str, f64> = HashMap::with_capacity(order.len());

    for (axis, encoder) in encoders.iter() {
        let code = encoder.encode(selections.get(axis))?;
        if !order.contains(axis.feature_name()) {
            return Err(SchemaMismatchError::UnplacedEncoding(axis.feature_name().into()).into());
        }
        merged.insert(axis.feature_name(), f64::from(code));
    }

    for (name, value) in numeric_inputs {
        if !order.contains(name) {
            return Err(SchemaMismatchError::UnknownFeature(name.clone()).into());
        }
        if is_encoded_feature(name) {
            return Err(SchemaMismatchError::CategoricalAsNumeric(name.clone()).into());
        }
        if !value.is_finite() {
            return Err(SchemaMismatchError::NonFinite(name.clone()).into());
        }
        merged.insert(name.as_str(), *value);
    }

    for name in order.numeric_features() {
        merged.entry(name).or_insert(DEFAULT_NUMERIC_VALUE);
    }

    let entries = order
        .names()
        .iter()
        .map(|name| {
            merged
                .remove(name.as_str())
                .map(|value| (name.clone(), value))
                .ok_or_else(|| SchemaMismatchError::MissingFeature(name.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FeatureVector::from_entries(entries))
}
