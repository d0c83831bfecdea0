//! Screening HTTP Routes
//!
//! Health, form options, prediction, and report download.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::error::NanoError;
use crate::service::{FormOptions, FormulationRequest, FormulationService, PredictionOutcome};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub prediction_enabled: bool,
    /// Why prediction is disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_error: Option<String>,
}

/// Health check route
pub fn health_routes(service: Arc<FormulationService>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(service)
}

/// Create screening routes
pub fn screening_routes(service: Arc<FormulationService>) -> Router {
    Router::new()
        .route("/form", get(form_handler))
        .route("/predict", post(predict_handler))
        .route("/report", post(report_handler))
        .with_state(service)
}

/// Health check handler
async fn health_handler(State(service): State<Arc<FormulationService>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        prediction_enabled: service.is_prediction_enabled(),
        asset_error: service.load_error().map(|e| e.to_string()),
    };

    (StatusCode::OK, Json(response))
}

async fn form_handler(
    State(service): State<Arc<FormulationService>>,
) -> Result<Json<FormOptions>, NanoError> {
    service.form_options().map(Json)
}

async fn predict_handler(
    State(service): State<Arc<FormulationService>>,
    payload: Result<Json<FormulationRequest>, JsonRejection>,
) -> Result<Json<PredictionOutcome>, NanoError> {
    let Json(request) = payload?;
    service.predict(&request).map(Json)
}

async fn report_handler(
    State(service): State<Arc<FormulationService>>,
    payload: Result<Json<FormulationRequest>, JsonRejection>,
) -> Result<Response, NanoError> {
    let Json(request) = payload?;
    let report = service.report(&request)?;
    let disposition = format!("attachment; filename=\"{}\"", report.file_name);

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, report.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        report.bytes,
    )
        .into_response())
}
