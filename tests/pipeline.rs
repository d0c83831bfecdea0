//! Pipeline Tests
//!
//! Encode, assemble, and predict end to end:
//! - Encoding is deterministic and rejects unknown labels
//! - Assembled vectors follow the feature order exactly
//! - Unset numeric inputs default to 0.0
//! - The verdict threshold is strict

mod common;

use nanoform::encoding::Axis;
use nanoform::features::{assemble, AssembleError, SchemaMismatchError, Selections};
use nanoform::prediction::{predict, StabilityLabel, Verdict};
use nanoform::service::FormulationService;

use common::{fixed_bundle, numeric, sample_request, selections, FEATURES};

// =============================================================================
// Encoding
// =============================================================================

/// Every vocabulary label encodes to the same code on repeated calls.
#[test]
fn test_encoding_is_deterministic() {
    let bundle = fixed_bundle(0.73);

    for axis in Axis::ALL {
        for label in bundle.vocabulary(axis) {
            let first = bundle.encode(axis, label).unwrap();
            for _ in 0..10 {
                assert_eq!(bundle.encode(axis, label).unwrap(), first);
            }
        }
    }
}

#[test]
fn test_unknown_label_is_rejected() {
    let bundle = fixed_bundle(0.73);
    let selections = Selections::new("Aspirin", "OilX", "SurfY");

    let err = assemble(&selections, &numeric(&[]), &bundle).unwrap_err();
    match err {
        AssembleError::UnknownCategory(e) => {
            assert_eq!(e.axis, Axis::Drug);
            assert_eq!(e.label, "Aspirin");
        }
        other => panic!("expected unknown category, got {:?}", other),
    }
}

// =============================================================================
// Assembly
// =============================================================================

#[test]
fn test_vector_follows_feature_order() {
    let bundle = fixed_bundle(0.73);
    let vector = assemble(&selections(), &numeric(&[("ph", 6.5), ("size", 120.0)]), &bundle)
        .unwrap();

    let names: Vec<&str> = vector.names().collect();
    assert_eq!(names, FEATURES.to_vec());
    assert_eq!(vector.values(), vec![0.0, 1.0, 0.0, 120.0, 6.5]);
}

#[test]
fn test_unset_numeric_defaults_to_zero() {
    let bundle = fixed_bundle(0.73);
    let vector = assemble(&selections(), &numeric(&[("size", 120.0)]), &bundle).unwrap();

    assert_eq!(vector.get("ph"), Some(0.0));
    assert_eq!(vector.len(), FEATURES.len());
}

#[test]
fn test_numeric_outside_schema_is_rejected() {
    let bundle = fixed_bundle(0.73);

    let err = assemble(&selections(), &numeric(&[("viscosity", 3.0)]), &bundle).unwrap_err();
    assert!(matches!(
        err,
        AssembleError::SchemaMismatch(SchemaMismatchError::UnknownFeature(_))
    ));

    let err = assemble(&selections(), &numeric(&[("oil_encoded", 1.0)]), &bundle).unwrap_err();
    assert!(matches!(
        err,
        AssembleError::SchemaMismatch(SchemaMismatchError::CategoricalAsNumeric(_))
    ));

    let err = assemble(&selections(), &numeric(&[("size", f64::NAN)]), &bundle).unwrap_err();
    assert!(matches!(
        err,
        AssembleError::SchemaMismatch(SchemaMismatchError::NonFinite(_))
    ));
}

// =============================================================================
// Verdicts
// =============================================================================

#[test]
fn test_threshold_is_strict() {
    assert_eq!(Verdict::from_probability(0.5).label(), StabilityLabel::Unstable);
    assert_eq!(
        Verdict::from_probability(0.500001).label(),
        StabilityLabel::Stable
    );
    assert_eq!(Verdict::from_probability(0.0).label(), StabilityLabel::Unstable);
    assert_eq!(Verdict::from_probability(1.0).label(), StabilityLabel::Stable);
}

#[test]
fn test_predict_uses_assembled_row() {
    let bundle = fixed_bundle(0.73);
    let vector = assemble(&selections(), &numeric(&[("size", 120.0)]), &bundle).unwrap();

    let verdict = predict(&vector, &bundle).unwrap();
    assert!(verdict.is_stable());
    assert_eq!(verdict.probability(), 0.73);
}

/// DrugA/OilX/SurfY, size 120.0, ph 6.5, classifier at 0.73.
#[test]
fn test_stable_formulation() {
    let service = FormulationService::with_bundle(fixed_bundle(0.73));
    let outcome = service.predict(&sample_request()).unwrap();

    assert_eq!(outcome.verdict, StabilityLabel::Stable);
    assert_eq!(outcome.confidence, "73.0%");
}

/// Same inputs, classifier exactly at the threshold.
#[test]
fn test_threshold_formulation_is_unstable() {
    let service = FormulationService::with_bundle(fixed_bundle(0.5));
    let outcome = service.predict(&sample_request()).unwrap();

    assert_eq!(outcome.verdict, StabilityLabel::Unstable);
    assert_eq!(outcome.confidence, "50.0%");
}

#[test]
fn test_outcome_serializes_features_in_order() {
    let service = FormulationService::with_bundle(fixed_bundle(0.73));
    let outcome = service.predict(&sample_request()).unwrap();

    let json = serde_json::to_string(&outcome).unwrap();
    let positions: Vec<usize> = FEATURES
        .iter()
        .map(|f| json.find(&format!("\"{}\"", f)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(json.contains("\"verdict\":\"STABLE\""));
    assert!(!json.contains("snapshot"));
}
