//! Asset Loading Tests
//!
//! - Any missing or corrupt artifact fails the whole load, naming it
//! - A failed load disables prediction without stopping the service
//! - The first load outcome is cached
//! - Schema checks run at load time

mod common;

use std::fs;
use std::sync::Arc;

use nanoform::assets::{read_bundle, Artifact, AssetLoadError, AssetLoader};
use nanoform::encoding::Axis;
use nanoform::prediction::StabilityLabel;
use nanoform::service::FormulationService;
use serde_json::json;
use tempfile::TempDir;

use common::{sample_request, write_artifact, write_assets, FEATURES};

fn setup_assets() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_assets(tmp.path(), 27.0, 73.0);
    tmp
}

// =============================================================================
// Complete bundles
// =============================================================================

#[test]
fn test_complete_bundle_predicts() {
    let tmp = setup_assets();
    let service = FormulationService::from_loader(&AssetLoader::new(tmp.path()));

    assert!(service.is_prediction_enabled());
    let outcome = service.predict(&sample_request()).unwrap();
    assert_eq!(outcome.verdict, StabilityLabel::Stable);
    assert_eq!(outcome.confidence, "73.0%");
}

// =============================================================================
// Missing and corrupt artifacts
// =============================================================================

#[test]
fn test_missing_surfactant_encoder_disables_prediction() {
    let tmp = setup_assets();
    fs::remove_file(tmp.path().join("encoder_surfactant.json")).unwrap();

    let loader = AssetLoader::new(tmp.path());
    let err = loader.load().unwrap_err();
    assert_eq!(err.artifact(), Artifact::Encoder(Axis::Surfactant));
    assert!(err.to_string().contains("encoder_surfactant"));

    let service = FormulationService::from_loader(&loader);
    assert!(!service.is_prediction_enabled());

    let err = service.predict(&sample_request()).unwrap_err();
    assert_eq!(err.code(), "NANO_ASSET_LOAD_FAILED");
    assert!(err.to_string().contains("encoder_surfactant"));
}

#[test]
fn test_corrupt_classifier_fails_load() {
    let tmp = setup_assets();
    fs::write(tmp.path().join("classifier.json"), "{\"trees\": ").unwrap();

    let err = read_bundle(tmp.path()).unwrap_err();
    assert_eq!(err.artifact(), Artifact::Classifier);
    assert!(matches!(err, AssetLoadError::Corrupt { .. }));
}

// =============================================================================
// Caching
// =============================================================================

#[test]
fn test_load_is_cached() {
    let tmp = setup_assets();
    let loader = AssetLoader::new(tmp.path());

    let first = loader.load().unwrap();
    for artifact in Artifact::ALL {
        fs::remove_file(tmp.path().join(artifact.file_name())).unwrap();
    }
    let second = loader.load().unwrap();

    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_failed_load_is_cached() {
    let tmp = TempDir::new().unwrap();
    let loader = AssetLoader::new(tmp.path());

    let first = loader.load().unwrap_err();
    write_assets(tmp.path(), 27.0, 73.0);
    let second = loader.load().unwrap_err();

    assert_eq!(first, second);
}

// =============================================================================
// Load-time schema checks
// =============================================================================

#[test]
fn test_duplicate_encoded_column_rejected() {
    let tmp = setup_assets();
    write_artifact(
        tmp.path(),
        "feature_order",
        json!({
            "version": "test-1",
            "features": ["drug_encoded", "drug_encoded", "oil_encoded", "surfactant_encoded", "size"]
        }),
    );

    let err = read_bundle(tmp.path()).unwrap_err();
    assert_eq!(err.artifact(), Artifact::FeatureOrder);
}

#[test]
fn test_missing_encoded_column_rejected() {
    let tmp = setup_assets();
    write_artifact(
        tmp.path(),
        "feature_order",
        json!({
            "version": "test-1",
            "features": ["drug_encoded", "oil_encoded", "size", "ph", "pdi"]
        }),
    );

    let err = read_bundle(tmp.path()).unwrap_err();
    assert_eq!(err.artifact(), Artifact::FeatureOrder);
}

#[test]
fn test_classifier_width_mismatch_rejected() {
    let tmp = setup_assets();
    write_artifact(
        tmp.path(),
        "classifier",
        json!({
            "n_features": FEATURES.len() + 1,
            "classes": ["0", "1"],
            "trees": [{
                "feature": [-2],
                "threshold": [-2.0],
                "children_left": [-1],
                "children_right": [-1],
                "value": [[1.0, 1.0]]
            }]
        }),
    );

    let err = read_bundle(tmp.path()).unwrap_err();
    assert_eq!(err.artifact(), Artifact::Classifier);
    assert!(matches!(err, AssetLoadError::Inconsistent { .. }));
}

#[test]
fn test_unencodable_vocabulary_rejected() {
    let tmp = setup_assets();
    write_artifact(tmp.path(), "vocabulary_oil", json!(["OilX", "OilZ"]));

    let err = read_bundle(tmp.path()).unwrap_err();
    assert_eq!(err.artifact(), Artifact::Vocabulary(Axis::Oil));
}
