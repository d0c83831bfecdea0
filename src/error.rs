//! # Request errors
//!
//! Every failure a prediction request can hit, with a stable code and the
//! HTTP status it maps to. All of them are recovered at the request
//! boundary and shown to the user; none ends the process.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::assets::AssetLoadError;
use crate::encoding::UnknownCategoryError;
use crate::features::{AssembleError, SchemaMismatchError};
use crate::observability::Severity;
use crate::prediction::InferenceError;
use crate::report::ReportError;

/// Result type for request handling
pub type NanoResult<T> = Result<T, NanoError>;

#[derive(Debug, Error)]
pub enum NanoError {
    /// Startup artifacts missing or corrupt; prediction disabled
    #[error("{0}")]
    AssetLoad(#[from] AssetLoadError),

    /// Selection outside the trained vocabulary
    #[error("{0}")]
    UnknownCategory(#[from] UnknownCategoryError),

    /// Inputs do not match the feature order
    #[error("{0}")]
    SchemaMismatch(#[from] SchemaMismatchError),

    /// Classifier invocation failed
    #[error("{0}")]
    Inference(#[from] InferenceError),

    /// Report could not be produced
    #[error("{0}")]
    Report(#[from] ReportError),

    /// Request body was not a valid formulation request
    #[error("Invalid request body: {message}")]
    InvalidRequest { status: StatusCode, message: String },
}

impl NanoError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            NanoError::AssetLoad(_) => "NANO_ASSET_LOAD_FAILED",
            NanoError::UnknownCategory(_) => "NANO_UNKNOWN_CATEGORY",
            NanoError::SchemaMismatch(_) => "NANO_SCHEMA_MISMATCH",
            NanoError::Inference(_) => "NANO_INFERENCE_FAILED",
            NanoError::Report(_) => "NANO_REPORT_FAILED",
            NanoError::InvalidRequest { .. } => "NANO_INVALID_REQUEST",
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            NanoError::AssetLoad(_) => StatusCode::SERVICE_UNAVAILABLE,
            NanoError::UnknownCategory(_) => StatusCode::UNPROCESSABLE_ENTITY,
            NanoError::SchemaMismatch(_) => StatusCode::UNPROCESSABLE_ENTITY,
            NanoError::Inference(_) => StatusCode::INTERNAL_SERVER_ERROR,
            NanoError::Report(_) => StatusCode::INTERNAL_SERVER_ERROR,
            NanoError::InvalidRequest { status, .. } => *status,
        }
    }

    /// Bad user input logs as a warning; asset and inference faults as errors.
    pub fn severity(&self) -> Severity {
        if self.status_code().is_client_error() {
            Severity::Warn
        } else {
            Severity::Error
        }
    }
}

impl From<JsonRejection> for NanoError {
    fn from(rejection: JsonRejection) -> Self {
        NanoError::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<AssembleError> for NanoError {
    fn from(err: AssembleError) -> Self {
        match err {
            AssembleError::UnknownCategory(e) => NanoError::UnknownCategory(e),
            AssembleError::SchemaMismatch(e) => NanoError::SchemaMismatch(e),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
    pub status: u16,
}

impl From<&NanoError> for ErrorResponse {
    fn from(err: &NanoError) -> Self {
        Self {
            error: err.to_string(),
            code: err.code(),
            status: err.status_code().as_u16(),
        }
    }
}

impl IntoResponse for NanoError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
