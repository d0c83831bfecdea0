//! Request handler for formulation screening.
//!
//! Runs the pipeline for one request at a time and turns every failure into
//! a typed, user-visible error. If the asset bundle failed to load, the
//! handler stays up and refuses prediction with the load error.

use std::sync::Arc;

use uuid::Uuid;

use crate::assets::{AssetBundle, AssetLoadError, AssetLoader};
use crate::encoding::Axis;
use crate::error::{NanoError, NanoResult};
use crate::features::{assemble, DEFAULT_NUMERIC_VALUE};
use crate::observability::{log_event_at, log_event_with_fields, Event};
use crate::prediction::{predict, Verdict};
use crate::report::{render, FormulationSnapshot, REPORT_CONTENT_TYPE, REPORT_FILE_NAME};

use super::types::{
    AxisOptions, FormOptions, FormulationRequest, NumericField, PredictionOutcome, RenderedReport,
};

/// Top-level handler owning the outcome of the one-time asset load
#[derive(Debug, Clone)]
pub struct FormulationService {
    assets: Result<Arc<AssetBundle>, AssetLoadError>,
}

impl FormulationService {
    /// Loads assets through the loader and logs the outcome.
    pub fn from_loader(loader: &AssetLoader) -> Self {
        let assets = loader.load();
        let asset_dir = loader.asset_dir().display().to_string();

        match &assets {
            Ok(bundle) => {
                let features = bundle.feature_order().len().to_string();
                log_event_with_fields(
                    Event::AssetsLoaded,
                    &[
                        ("asset_dir", asset_dir.as_str()),
                        ("features", features.as_str()),
                        ("feature_order_version", bundle.feature_order().version()),
                    ],
                );
            }
            Err(e) => {
                let artifact = e.artifact().name();
                let message = e.to_string();
                log_event_with_fields(
                    Event::AssetsLoadFailed,
                    &[
                        ("artifact", artifact.as_str()),
                        ("asset_dir", asset_dir.as_str()),
                        ("message", message.as_str()),
                    ],
                );
            }
        }

        Self { assets }
    }

    /// Wraps an already built bundle.
    pub fn with_bundle(bundle: Arc<AssetBundle>) -> Self {
        Self { assets: Ok(bundle) }
    }

    /// Whether the analyze action is available
    pub fn is_prediction_enabled(&self) -> bool {
        self.assets.is_ok()
    }

    /// Why prediction is disabled, if it is
    pub fn load_error(&self) -> Option<&AssetLoadError> {
        self.assets.as_ref().err()
    }

    /// The bundle, or the load error that disabled prediction
    pub fn bundle(&self) -> NanoResult<&AssetBundle> {
        match &self.assets {
            Ok(bundle) => Ok(bundle.as_ref()),
            Err(e) => Err(NanoError::AssetLoad(e.clone())),
        }
    }

    /// Picker choices and numeric fields for the form
    pub fn form_options(&self) -> NanoResult<FormOptions> {
        let bundle = self.bundle()?;
        let order = bundle.feature_order();

        Ok(FormOptions {
            feature_order_version: order.version().to_string(),
            axes: Axis::ALL
                .into_iter()
                .map(|axis| AxisOptions {
                    axis,
                    choices: bundle.vocabulary(axis).to_vec(),
                })
                .collect(),
            numeric_fields: order
                .numeric_features()
                .map(|name| NumericField {
                    name: name.to_string(),
                    default: DEFAULT_NUMERIC_VALUE,
                })
                .collect(),
        })
    }

    /// Runs encode, assemble, and predict for one request.
    pub fn predict(&self, request: &FormulationRequest) -> NanoResult<PredictionOutcome> {
        let request_id = Uuid::new_v4();
        let id = request_id.to_string();
        log_event_with_fields(Event::PredictionReceived, &[("request_id", id.as_str())]);

        let result = self.run_pipeline(request_id, request);

        match &result {
            Ok(outcome) => {
                let probability = outcome.probability.to_string();
                log_event_with_fields(
                    Event::PredictionComplete,
                    &[
                        ("probability", probability.as_str()),
                        ("request_id", id.as_str()),
                        ("verdict", outcome.verdict.as_str()),
                    ],
                );
            }
            Err(e) => {
                let message = e.to_string();
                log_event_at(
                    Event::PredictionRejected,
                    e.severity(),
                    &[
                        ("code", e.code()),
                        ("message", message.as_str()),
                        ("request_id", id.as_str()),
                    ],
                );
            }
        }

        result
    }

    fn run_pipeline(
        &self,
        request_id: Uuid,
        request: &FormulationRequest,
    ) -> NanoResult<PredictionOutcome> {
        let bundle = self.bundle()?;
        let vector = assemble(&request.selections, &request.numeric, bundle)?;
        let verdict = predict(&vector, bundle)?;

        Ok(PredictionOutcome {
            request_id,
            verdict: verdict.label(),
            probability: verdict.probability(),
            confidence: verdict.confidence_display(),
            snapshot: FormulationSnapshot::from_selections(&request.selections, &vector),
            features: vector,
        })
    }

    /// Predicts and renders the downloadable report.
    pub fn report(&self, request: &FormulationRequest) -> NanoResult<RenderedReport> {
        let outcome = self.predict(request)?;
        let verdict = Verdict::from_probability(outcome.probability);
        let bytes = render(&outcome.snapshot, &verdict)?;

        let id = outcome.request_id.to_string();
        let size = bytes.len().to_string();
        log_event_with_fields(
            Event::ReportRendered,
            &[("bytes", size.as_str()), ("request_id", id.as_str())],
        );

        Ok(RenderedReport {
            request_id: outcome.request_id,
            file_name: REPORT_FILE_NAME,
            content_type: REPORT_CONTENT_TYPE,
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{CategoryEncoder, PerAxis};
    use crate::features::{FeatureOrder, Selections};
    use crate::prediction::{Classifier, ClassifierError, StabilityLabel};
    use tempfile::TempDir;

    #[derive(Debug)]
    struct Fixed(f64);

    impl Classifier for Fixed {
        fn n_features(&self) -> usize {
            5
        }

        fn stable_probability(&self, _row: &[f64]) -> Result<f64, ClassifierError> {
            Ok(self.0)
        }
    }

    fn service(probability: f64) -> FormulationService {
        let bundle = AssetBundle::new(
            Box::new(Fixed(probability)),
            FeatureOrder::new(
                "v1",
                vec![
                    "drug_encoded".into(),
                    "oil_encoded".into(),
                    "surfactant_encoded".into(),
                    "size".into(),
                    "ph".into(),
                ],
            ),
            PerAxis::new(
                CategoryEncoder::new(Axis::Drug, vec!["DrugA".into()]).unwrap(),
                CategoryEncoder::new(Axis::Oil, vec!["OilX".into()]).unwrap(),
                CategoryEncoder::new(Axis::Surfactant, vec!["SurfY".into()]).unwrap(),
            ),
            PerAxis::new(
                vec!["DrugA".into()],
                vec!["OilX".into()],
                vec!["SurfY".into()],
            ),
        )
        .unwrap();
        FormulationService::with_bundle(Arc::new(bundle))
    }

    fn request(drug: &str) -> FormulationRequest {
        FormulationRequest {
            selections: Selections::new(drug, "OilX", "SurfY"),
            numeric: [("size".to_string(), 120.0)].into_iter().collect(),
        }
    }

    #[test]
    fn test_predict_outcome() {
        let outcome = service(0.73).predict(&request("DrugA")).unwrap();
        assert_eq!(outcome.verdict, StabilityLabel::Stable);
        assert_eq!(outcome.confidence, "73.0%");
        assert_eq!(outcome.features.get("ph"), Some(0.0));
        assert_eq!(outcome.snapshot.entries()[0].value, "DrugA");
    }

    #[test]
    fn test_unknown_category_surfaces() {
        let err = service(0.73).predict(&request("Aspirin")).unwrap_err();
        assert_eq!(err.code(), "NANO_UNKNOWN_CATEGORY");
    }

    #[test]
    fn test_form_options() {
        let options = service(0.73).form_options().unwrap();
        assert_eq!(options.axes.len(), 3);
        assert_eq!(options.axes[2].choices, vec!["SurfY".to_string()]);
        let names: Vec<_> = options.numeric_fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["size", "ph"]);
    }

    #[test]
    fn test_report_download() {
        let report = service(0.5).report(&request("DrugA")).unwrap();
        assert_eq!(report.file_name, "Nano_Formulation_Report.pdf");
        assert_eq!(report.content_type, "application/pdf");
        let text = String::from_utf8_lossy(&report.bytes);
        assert!(text.contains("Final Prediction: UNSTABLE"));
        assert!(text.contains("50.0%"));
    }

    #[test]
    fn test_failed_load_disables_prediction() {
        let tmp = TempDir::new().unwrap();
        let service = FormulationService::from_loader(&AssetLoader::new(tmp.path()));

        assert!(!service.is_prediction_enabled());
        assert!(service.load_error().is_some());
        let err = service.predict(&request("DrugA")).unwrap_err();
        assert_eq!(err.code(), "NANO_ASSET_LOAD_FAILED");
        assert!(service.form_options().is_err());
    }
}
