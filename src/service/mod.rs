//! Formulation screening service
//!
//! Owns the loaded asset bundle and runs the encode, assemble, predict, and
//! report steps for each request. Shared by the HTTP server and the CLI.

mod handler;
mod types;

pub use handler::FormulationService;
pub use types::{
    AxisOptions, FormOptions, FormulationRequest, NumericField, PredictionOutcome, RenderedReport,
};
