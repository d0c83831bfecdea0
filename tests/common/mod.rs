//! Shared helpers for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::sync::Arc;

use nanoform::assets::AssetBundle;
use nanoform::encoding::{Axis, CategoryEncoder, PerAxis};
use nanoform::features::{FeatureOrder, NumericInputs, Selections};
use nanoform::prediction::{Classifier, ClassifierError};
use nanoform::service::FormulationRequest;
use serde_json::{json, Value};

pub const FEATURES: [&str; 5] = [
    "drug_encoded",
    "oil_encoded",
    "surfactant_encoded",
    "size",
    "ph",
];

/// Classifier that returns the same probability for every row
#[derive(Debug)]
pub struct FixedClassifier(pub f64);

impl Classifier for FixedClassifier {
    fn n_features(&self) -> usize {
        FEATURES.len()
    }

    fn stable_probability(&self, _row: &[f64]) -> Result<f64, ClassifierError> {
        Ok(self.0)
    }
}

pub fn feature_order() -> FeatureOrder {
    FeatureOrder::new("test-1", FEATURES.iter().map(|f| f.to_string()).collect())
}

/// In-memory bundle around a fixed-probability classifier
pub fn fixed_bundle(probability: f64) -> Arc<AssetBundle> {
    let bundle = AssetBundle::new(
        Box::new(FixedClassifier(probability)),
        feature_order(),
        PerAxis::new(
            CategoryEncoder::new(Axis::Drug, vec!["DrugA".into(), "DrugB".into()]).unwrap(),
            CategoryEncoder::new(Axis::Oil, vec!["OilW".into(), "OilX".into()]).unwrap(),
            CategoryEncoder::new(Axis::Surfactant, vec!["SurfY".into()]).unwrap(),
        ),
        PerAxis::new(
            vec!["DrugA".into(), "DrugB".into()],
            vec!["OilW".into(), "OilX".into()],
            vec!["SurfY".into()],
        ),
    )
    .unwrap();
    Arc::new(bundle)
}

pub fn write_artifact(dir: &Path, name: &str, value: Value) {
    fs::write(dir.join(format!("{}.json", name)), value.to_string()).unwrap();
}

/// Writes a complete artifact set whose forest is a single leaf with the
/// given class weights, so every row scores `stable / (unstable + stable)`.
pub fn write_assets(dir: &Path, unstable: f64, stable: f64) {
    write_artifact(
        dir,
        "classifier",
        json!({
            "n_features": FEATURES.len(),
            "classes": ["0", "1"],
            "trees": [{
                "feature": [-2],
                "threshold": [-2.0],
                "children_left": [-1],
                "children_right": [-1],
                "value": [[unstable, stable]]
            }]
        }),
    );
    write_artifact(
        dir,
        "feature_order",
        json!({"version": "test-1", "features": FEATURES}),
    );
    write_artifact(dir, "encoder_drug", json!({"classes": ["DrugA", "DrugB"]}));
    write_artifact(dir, "encoder_oil", json!({"classes": ["OilW", "OilX"]}));
    write_artifact(dir, "encoder_surfactant", json!({"classes": ["SurfY"]}));
    write_artifact(dir, "vocabulary_drug", json!(["DrugA", "DrugB"]));
    write_artifact(dir, "vocabulary_oil", json!(["OilW", "OilX"]));
    write_artifact(dir, "vocabulary_surfactant", json!(["SurfY"]));
}

pub fn selections() -> Selections {
    Selections::new("DrugA", "OilX", "SurfY")
}

pub fn numeric(pairs: &[(&str, f64)]) -> NumericInputs {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

/// DrugA / OilX / SurfY with size 120.0 and ph 6.5
pub fn sample_request() -> FormulationRequest {
    FormulationRequest {
        selections: selections(),
        numeric: numeric(&[("size", 120.0), ("ph", 6.5)]),
    }
}
