//! Prediction service

use crate::assets::AssetBundle;
use crate::features::{FeatureOrder, FeatureVector};

use super::classifier::Classifier;
use super::errors::InferenceError;
use super::verdict::Verdict;

/// Scores a feature vector and thresholds the result.
///
/// # Errors
///
/// Returns `InferenceError` if the vector does not follow the bundle's
/// feature order, the classifier fails, or the classifier output is not a
/// probability. No default verdict is ever substituted.
pub fn predict(vector: &FeatureVector, bundle: &AssetBundle) -> Result<Verdict, InferenceError> {
    predict_with(vector, bundle.feature_order(), bundle.classifier())
}

pub(crate) fn predict_with(
    vector: &FeatureVector,
    order: &FeatureOrder,
    classifier: &dyn Classifier,
) -> Result<Verdict, InferenceError> {
    let row = row_in_order(vector, order)?;

    let probability = classifier.stable_probability(&row)?;
    if !(0.0..=1.0).contains(&probability) {
        return Err(InferenceError::InvalidProbability(probability));
    }

    Ok(Verdict::from_probability(probability))
}

fn row_in_order(vector: &FeatureVector, order: &FeatureOrder) -> Result<Vec<f64>, InferenceError> {
    if vector.len() != order.len() {
        return Err(InferenceError::LengthMismatch {
            expected: order.len(),
            actual: vector.len(),
        });
    }

    for (position, (found, expected)) in vector.names().zip(order.names()).enumerate() {
        if found != expected.as_str() {
            return Err(InferenceError::OrderMismatch {
                position,
                expected: expected.clone(),
                found: found.to_string(),
            });
        }
    }

    Ok(vector.values())
}
