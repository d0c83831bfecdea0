//! # HTTP Server Module
//!
//! Axum server exposing the screening form to a browser client.
//!
//! # Endpoints
//!
//! - `GET /health` - Liveness and whether prediction is enabled
//! - `GET /api/form` - Picker choices and numeric fields
//! - `POST /api/predict` - Verdict for one formulation
//! - `POST /api/report` - PDF report download

pub mod config;
pub mod routes;
pub mod server;

pub use config::{CorsPolicy, HttpConfigError, HttpServerConfig};
pub use server::HttpServer;
