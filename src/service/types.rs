//! Request and response types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::encoding::Axis;
use crate::features::{FeatureVector, NumericInputs, Selections};
use crate::prediction::StabilityLabel;
use crate::report::FormulationSnapshot;

/// One form submission
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FormulationRequest {
    #[serde(flatten)]
    pub selections: Selections,
    /// Numeric fields; unset fields default to 0.0
    #[serde(default)]
    pub numeric: NumericInputs,
}

/// Result of a successful prediction
#[derive(Debug, Clone, Serialize)]
pub struct PredictionOutcome {
    pub request_id: Uuid,
    pub verdict: StabilityLabel,
    /// Probability of the "stable" class
    pub probability: f64,
    /// `probability` as a one-decimal percentage
    pub confidence: String,
    /// Encoded row, in feature order
    pub features: FeatureVector,
    /// Human-readable inputs for the report
    #[serde(skip)]
    pub snapshot: FormulationSnapshot,
}

/// A rendered report ready for download
#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub request_id: Uuid,
    pub file_name: &'static str,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Choices for one category picker
#[derive(Debug, Clone, Serialize)]
pub struct AxisOptions {
    pub axis: Axis,
    pub choices: Vec<String>,
}

/// One numeric input field
#[derive(Debug, Clone, Serialize)]
pub struct NumericField {
    pub name: String,
    pub default: f64,
}

/// Everything a form needs to render its inputs
#[derive(Debug, Clone, Serialize)]
pub struct FormOptions {
    pub feature_order_version: String,
    pub axes: Vec<AxisOptions>,
    pub numeric_fields: Vec<NumericField>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_parsing() {
        let request: FormulationRequest = serde_json::from_str(
            r#"{"drug": "DrugA", "oil": "OilX", "surfactant": "SurfY", "numeric": {"size": 120.0}}"#,
        )
        .unwrap();
        assert_eq!(request.selections, Selections::new("DrugA", "OilX", "SurfY"));
        assert_eq!(request.numeric.get("size"), Some(&120.0));
    }

    #[test]
    fn test_numeric_is_optional() {
        let request: FormulationRequest =
            serde_json::from_str(r#"{"drug": "DrugA", "oil": "OilX", "surfactant": "SurfY"}"#)
                .unwrap();
        assert!(request.numeric.is_empty());
    }

    #[test]
    fn test_missing_selection_rejected() {
        let result: Result<FormulationRequest, _> =
            serde_json::from_str(r#"{"drug": "DrugA", "oil": "OilX"}"#);
        assert!(result.is_err());
    }
}
