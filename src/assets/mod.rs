//! Asset bundle loading
//!
//! Inference needs a fixed set of artifacts produced by offline training:
//! the classifier, the feature order, one encoder and one vocabulary per
//! axis. They are JSON files in a single asset directory.
//!
//! # Rules
//!
//! - All artifacts or nothing: any missing or corrupt file fails the load
//! - Cross-artifact consistency is checked at load time, not per request
//! - A bundle is immutable once built and shared read-only
//! - `AssetLoader` reads storage at most once

mod artifacts;
mod bundle;
mod errors;
mod loader;

pub use artifacts::Artifact;
pub use bundle::AssetBundle;
pub use errors::AssetLoadError;
pub use loader::{read_bundle, AssetLoader};
